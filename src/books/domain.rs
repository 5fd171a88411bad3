use crate::core::domain::Identifiable;

pub mod model;

pub trait Book: Identifiable {
    fn is_available(&self) -> bool;
    // number of copies currently held by members
    fn borrowed_copies(&self) -> i64;
    fn is_on_loan(&self) -> bool {
        self.borrowed_copies() > 0
    }
}

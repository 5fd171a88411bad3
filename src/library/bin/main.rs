use tracing::{error, info};
use lms::gateway::GatewayPublisherVia;
use lms::utils::logs::setup_tracing;
use lms::{create_library, BookUpdate, CatalogService, CheckoutService, Configuration, LibraryResult, MemberService};

const DEV_MODE: bool = true;

// logs the outcome of one step, rejections are part of the walkthrough
fn step<T>(name: &str, res: LibraryResult<T>) {
    match res {
        Ok(_) => info!(step = name, "ok"),
        Err(err) if err.is_fault() => error!(step = name, reason = %err.reason_code(), "{}", err),
        Err(err) => info!(step = name, reason = %err.reason_code(), "rejected: {}", err),
    }
}

fn main() -> Result<(), serde_json::Error> {
    setup_tracing();

    let config = if DEV_MODE {
        Configuration::new("dev")
    } else {
        Configuration::new("main")
    };
    let mut library = create_library(&config, GatewayPublisherVia::Logs);

    step("add_book", library.add_book("978-0001", "The Great Adventure", "Alice Writer", "Fiction", 3));
    step("add_book", library.add_book("978-0002", "Python for Beginners", "Bob Coder", "Non-Fiction", 2));
    step("add_book", library.add_book("978-0003", "Space Odyssey", "Carol SciFi", "Sci-Fi", 1));

    step("add_member", library.add_member("M001", "John Doe", "john@example.com"));
    step("add_member", library.add_member("M002", "Jane Smith", "jane@example.com"));

    let found = library.search_books("python");
    info!(query = "python", results = serde_json::to_string(&found)?.as_str(), "search_books");

    step("borrow_book", library.borrow_book("M001", "978-0002"));
    step("borrow_book", library.borrow_book("M001", "978-0001"));
    step("borrow_book", library.borrow_book("M002", "978-0003"));
    // the only copy is already out
    step("borrow_book", library.borrow_book("M002", "978-0003"));

    step("return_book", library.return_book("M001", "978-0001"));
    step("update_book", library.update_book("978-0003", &BookUpdate::default().total_copies(2)));

    // blocked while M001 holds a copy
    step("delete_book", library.delete_book("978-0002"));
    step("return_book", library.return_book("M001", "978-0002"));
    step("delete_book", library.delete_book("978-0002"));

    step("delete_member", library.delete_member("M002"));
    step("return_book", library.return_book("M002", "978-0003"));
    step("delete_member", library.delete_member("M002"));

    info!(books = serde_json::to_string(&library.list_books())?.as_str(),
        members = serde_json::to_string(&library.list_members())?.as_str(),
        "final state");
    Ok(())
}

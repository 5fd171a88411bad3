use crate::books::factory::create_book_repository;
use crate::core::domain::Configuration;
use crate::gateway::factory::create_publisher;
use crate::gateway::GatewayPublisherVia;
use crate::library::Library;
use crate::members::factory::create_member_repository;

pub fn create_library(config: &Configuration, via: GatewayPublisherVia) -> Library {
    let book_repo = create_book_repository();
    let member_repo = create_member_repository();
    let publisher = create_publisher(via);
    Library::new(config, book_repo, member_repo, publisher)
}

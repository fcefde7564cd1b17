use crate::catalog::factory::create_catalog_repository;
use crate::core::domain::Configuration;
use crate::library::domain::LibraryService;
use crate::library::domain::service::LibraryServiceImpl;
use crate::reviews::domain::ReviewService;

pub fn create_library_service(config: &Configuration, review_service: Box<dyn ReviewService>) -> Box<dyn LibraryService> {
    let catalog_repository = create_catalog_repository();
    Box::new(LibraryServiceImpl::new(config, catalog_repository, review_service))
}

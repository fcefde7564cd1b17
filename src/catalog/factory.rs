use crate::catalog::repository::CatalogRepository;
use crate::catalog::repository::memory_catalog_repository::MemoryCatalogRepository;

pub fn create_catalog_repository() -> Box<dyn CatalogRepository> {
    Box::new(MemoryCatalogRepository::new())
}

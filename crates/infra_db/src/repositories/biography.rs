//! Biography repository

use domain_catalog::Biography;

use super::generic::GenericRepository;
use crate::session::Session;

/// Biographies need nothing beyond the generic operations
pub struct BiographyRepository<'s> {
    inner: GenericRepository<'s, Biography>,
}

impl<'s> BiographyRepository<'s> {
    pub(crate) fn new(session: &'s mut Session) -> Self {
        Self {
            inner: GenericRepository::new(session),
        }
    }
}

delegate_repository!(BiographyRepository, Biography);

use crate::executor::HttpExecutor;

pub const SUBMIT_PATH: &str = "/doc/submit";
pub const VERIFY_PATH: &str = "/doc/verify";

pub struct DocumentRepositoryImpl {
    pub(crate) executor: HttpExecutor,
}

impl DocumentRepositoryImpl {
    pub fn new(executor: HttpExecutor) -> Self {
        Self { executor }
    }
}

use crate::connector::structs::count_result::CountResult;

impl CountResult {
    pub fn new(count: u64) -> Self {
        Self { count }
    }
}

impl From<usize> for CountResult {
    fn from(count: usize) -> Self {
        Self { count: count as u64 }
    }
}

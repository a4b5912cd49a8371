//! "View profile" action collaborator

/// Handler behind the per-row "View Profile" action
pub trait ProfileViewer: Send + Sync {
    /// # Arguments
    /// * `student_id` - Id carried by the clicked row
    fn open_profile(&self, student_id: &str);
}

/// Default handler: only logs the request
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProfileViewer;

impl ProfileViewer for LogProfileViewer {
    fn open_profile(&self, student_id: &str) {
        log::info!("Opening profile for student {student_id}");
    }
}

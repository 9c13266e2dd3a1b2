//! Optional collaborators the form controller talks to.

/// Assistive-technology live-region announcer.
pub trait Announcer {
    fn announce(&self, message: &str);
}

/// Used when the page registers no announcer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Announcer for Silent {
    fn announce(&self, _message: &str) {}
}

/// Name/value pairs of a form that passed validation, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub entries: Vec<(String, String)>,
}

/// Where accepted submissions go.
pub trait SubmitSink {
    fn submit(&self, submission: &Submission);
}

/// Logs submissions; the page has no backend to post them to.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SubmitSink for LogSink {
    fn submit(&self, submission: &Submission) {
        log::info!("form submitted: {:?}", submission.entries);
    }
}

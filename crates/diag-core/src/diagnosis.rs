use crate::error::Result;
use crate::report::DiagnosisReport;

pub trait DiagnosisEngine: Send + Sync {
    /// Diagnose one maintenance note. `text` must be non-empty; front ends
    /// reject empty input before calling in.
    fn diagnose(&self, text: &str) -> Result<DiagnosisReport>;
}

use super::Diagnostic;
use crate::types::Fault;
use core::fmt::Display;

impl Display for Diagnostic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if !f.alternate() {
            return Display::fmt(&self.fmt(), f);
        }
        Display::fmt(&self.fmt().traceback(), f)
    }
}

impl std::error::Error for Diagnostic {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.fault)
    }
}

impl From<Fault> for Diagnostic {
    #[inline]
    #[track_caller]
    fn from(fault: Fault) -> Self {
        Self::new(fault)
    }
}

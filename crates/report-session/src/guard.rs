//! At most one export at a time

use std::cell::Cell;
use std::rc::Rc;

use crate::error::SessionError;

/// Shared flag marking an export in flight
#[derive(Debug, Clone, Default)]
pub struct ExportSlot {
    busy: Rc<Cell<bool>>,
}

impl ExportSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    /// Claim the slot; fails while another guard is alive
    pub fn try_acquire(&self) -> Result<ExportGuard, SessionError> {
        if self.busy.replace(true) {
            return Err(SessionError::ExportInFlight);
        }
        Ok(ExportGuard {
            busy: Rc::clone(&self.busy),
        })
    }
}

/// Releases the slot when dropped, whether the export succeeded or not
#[derive(Debug)]
pub struct ExportGuard {
    busy: Rc<Cell<bool>>,
}

impl Drop for ExportGuard {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_fails_until_release() {
        let slot = ExportSlot::new();
        let guard = slot.try_acquire().unwrap();
        assert!(slot.is_busy());
        assert!(matches!(
            slot.try_acquire(),
            Err(SessionError::ExportInFlight)
        ));
        drop(guard);
        assert!(!slot.is_busy());
        assert!(slot.try_acquire().is_ok());
    }
}

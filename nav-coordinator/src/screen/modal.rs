/// Open/closed state for a transient surface, with data when open.
///
/// # Examples
///
/// ```rust
/// use nav_coordinator::screen::ModalState;
///
/// let mut sheet: ModalState<u32> = ModalState::Closed;
/// sheet.open(4);
/// assert_eq!(sheet.take(), Some(4));
/// assert!(sheet.is_closed());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalState<T> {
    /// Surface is closed
    Closed,

    /// Surface is open with data
    Open(T),
}

impl<T> Default for ModalState<T> {
    fn default() -> Self {
        ModalState::Closed
    }
}

impl<T> ModalState<T> {
    /// Check if the surface is open
    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open(_))
    }

    /// Check if the surface is closed
    pub fn is_closed(&self) -> bool {
        matches!(self, ModalState::Closed)
    }

    /// Open the surface with data, replacing any previous data
    pub fn open(&mut self, data: T) {
        *self = ModalState::Open(data);
    }

    /// Close the surface
    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }

    /// Get the data if open, None otherwise
    pub fn data(&self) -> Option<&T> {
        match self {
            ModalState::Open(data) => Some(data),
            ModalState::Closed => None,
        }
    }

    /// Close the surface and return its data
    pub fn take(&mut self) -> Option<T> {
        match std::mem::take(self) {
            ModalState::Open(data) => Some(data),
            ModalState::Closed => None,
        }
    }
}

//! Messages a masked input reports to its host.
//!
//! The [`Message`] trait is object-safe and supports downcasting via `Any`,
//! so hosts can queue messages from different fields in one `Vec<Box<dyn Message>>`.

use std::any::Any;

// ---------------------------------------------------------------------------
// Message trait
// ---------------------------------------------------------------------------

/// Object-safe message trait.
pub trait Message: Send + 'static {
    /// Upcast to `&dyn Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Human-readable name for this message type.
    fn message_name(&self) -> &str;
}

/// Downcast a boxed message to a concrete type.
pub fn downcast_ref<T: Message>(message: &dyn Message) -> Option<&T> {
    message.as_any().downcast_ref::<T>()
}

// ---------------------------------------------------------------------------
// Built-in messages
// ---------------------------------------------------------------------------

/// The raw value changed because of a user edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueChanged {
    /// The new raw value.
    pub raw: String,
    /// The new display string.
    pub display: String,
    /// Whether every slot is now filled.
    pub complete: bool,
}

impl Message for ValueChanged {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn message_name(&self) -> &str {
        "ValueChanged"
    }
}

/// Enter was pressed in the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted {
    /// The raw value at submission time.
    pub raw: String,
    /// Whether every slot was filled.
    pub complete: bool,
}

impl Message for Submitted {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn message_name(&self) -> &str {
        "Submitted"
    }
}

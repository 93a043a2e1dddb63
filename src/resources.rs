//! Resource definitions
//!
//! This module contains the global settings consulted by the editor glue.
//! Resources are singleton data that can be accessed by any system.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::PRIMARY_CONTEXT_ID;

/// Global settings for the editor camera glue
///
/// An embedding editor can mutate this resource at runtime, e.g. to point
/// the glue at a different viewport context or to suspend attachment while
/// a scene is being loaded.
#[derive(Resource, Clone, Debug, Serialize, Deserialize)]
pub struct EditorMotionSettings {
    /// Context id treated as the editable viewport
    pub primary_context: u32,
    /// Attach [`EditorMotion`](crate::components::EditorMotion) to freshly
    /// added cameras on the primary context
    pub auto_attach: bool,
}

impl Default for EditorMotionSettings {
    fn default() -> Self {
        Self {
            primary_context: PRIMARY_CONTEXT_ID,
            auto_attach: true,
        }
    }
}

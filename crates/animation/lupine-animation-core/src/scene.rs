//! Capability traits the host scene implements.
//!
//! The core never owns scene objects. Tracks write through [`PropertyTarget`]
//! and animations locate their targets by walking [`SceneNode`] children
//! along a `/`-separated path relative to the animated root.

use lupine_api_core::Value;

use crate::error::ApplyError;

/// Something a track can write properties onto and invoke methods on.
pub trait PropertyTarget {
    fn has_property(&self, name: &str) -> bool;

    fn set_property(&mut self, name: &str, value: Value) -> Result<(), ApplyError>;

    fn has_method(&self, _name: &str) -> bool {
        false
    }

    /// Invoke a zero-argument method.
    fn call_method(&mut self, name: &str) -> Result<(), ApplyError> {
        Err(ApplyError::target(name, "method calls are not supported"))
    }
}

/// A node in the host hierarchy.
pub trait SceneNode: PropertyTarget {
    fn name(&self) -> &str;

    /// Direct child with the given name.
    fn child_mut(&mut self, name: &str) -> Option<&mut dyn SceneNode>;
}

/// Resolve `path` relative to `root`. Empty segments are ignored, so `""`
/// and `"/"` both resolve to the root itself.
pub fn resolve_path<'a>(root: &'a mut dyn SceneNode, path: &str) -> Option<&'a mut dyn SceneNode> {
    let mut node = root;
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        node = node.child_mut(segment)?;
    }
    Some(node)
}

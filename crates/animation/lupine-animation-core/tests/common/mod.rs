#![allow(dead_code)]
//! In-memory scene used by the integration tests.

use std::collections::HashMap;

use lupine_animation_core::{ApplyError, PropertyTarget, SceneNode, Value};

pub fn approx(a: f32, b: f32, eps: f32) {
    assert!((a - b).abs() <= eps, "left={a} right={b} eps={eps}");
}

/// Assert that `v` is a list of floats close to `expected`.
pub fn approx_floats(v: &Value, expected: &[f32], eps: f32) {
    let items = v.as_sequence().unwrap_or_else(|| panic!("expected a sequence, got {v:?}"));
    assert_eq!(items.len(), expected.len(), "length of {v:?}");
    for (item, e) in items.iter().zip(expected) {
        approx(item.as_f32().expect("numeric element"), *e, eps);
    }
}

#[derive(Debug, Default)]
pub struct TestNode {
    pub name: String,
    pub props: HashMap<String, Value>,
    pub methods: Vec<String>,
    /// Methods invoked, in call order.
    pub calls: Vec<String>,
    /// Properties whose writes are rejected.
    pub read_only: Vec<String>,
    pub children: Vec<TestNode>,
}

impl TestNode {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn with_prop(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.props.insert(name.to_string(), value.into());
        self
    }

    pub fn with_method(mut self, name: &str) -> Self {
        self.methods.push(name.to_string());
        self
    }

    pub fn read_only(mut self, prop: &str) -> Self {
        self.read_only.push(prop.to_string());
        self
    }

    pub fn with_child(mut self, child: TestNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn get(&self, prop: &str) -> Option<&Value> {
        self.props.get(prop)
    }

    /// Walk `/`-separated child names.
    pub fn find(&self, path: &str) -> Option<&TestNode> {
        let mut node = self;
        for segment in path.split('/').filter(|s| !s.is_empty()) {
            node = node.children.iter().find(|c| c.name == segment)?;
        }
        Some(node)
    }

    pub fn prop_at(&self, path: &str, prop: &str) -> Option<&Value> {
        self.find(path).and_then(|n| n.get(prop))
    }
}

impl PropertyTarget for TestNode {
    fn has_property(&self, name: &str) -> bool {
        self.props.contains_key(name)
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<(), ApplyError> {
        if self.read_only.iter().any(|p| p == name) {
            return Err(ApplyError::target(name, "read-only"));
        }
        self.props.insert(name.to_string(), value);
        Ok(())
    }

    fn has_method(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m == name)
    }

    fn call_method(&mut self, name: &str) -> Result<(), ApplyError> {
        self.calls.push(name.to_string());
        Ok(())
    }
}

impl SceneNode for TestNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn child_mut(&mut self, name: &str) -> Option<&mut dyn SceneNode> {
        self.children
            .iter_mut()
            .find(|c| c.name == name)
            .map(|c| c as &mut dyn SceneNode)
    }
}

/// Root > Hero(position, rotation, scale) > Sprite(frame, modulate) + Blip(audio).
pub fn hero_scene() -> TestNode {
    TestNode::new("Root").with_child(
        TestNode::new("Hero")
            .with_prop("position", Value::floats(&[0.0, 0.0]))
            .with_prop("rotation", 0.0)
            .with_prop("scale", Value::floats(&[1.0, 1.0]))
            .with_prop("opacity", 1.0)
            .with_child(
                TestNode::new("Sprite")
                    .with_prop("frame", 0i64)
                    .with_prop("modulate", Value::floats(&[1.0, 1.0, 1.0, 1.0]))
                    .with_method("update_region_for_frame"),
            )
            .with_child(
                TestNode::new("Blip")
                    .with_prop("volume", 1.0)
                    .with_prop("pitch", 1.0)
                    .with_method("play")
                    .with_method("stop"),
            ),
    )
}

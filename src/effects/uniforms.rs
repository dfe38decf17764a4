//! Recording uniform sink
//!
//! `UniformSet` implements `FxPipeline` by remembering the last value pushed
//! for each uniform name. Headless hosts use it to inspect what a descriptor
//! would upload, and GPU hosts can flatten it into a uniform buffer.

use std::collections::BTreeMap;

use super::context::TextureFrame;
use super::traits::FxPipeline;

/// A single recorded uniform value
#[derive(Debug, Clone, PartialEq)]
pub enum UniformValue {
    Float(f32),
    Vec2([f32; 2]),
    Vec3([f32; 3]),
    Vec4([f32; 4]),
    Int(i32),
    FloatArray(Vec<f32>),
    /// Texture bindings are not part of the packed float block
    Texture(TextureFrame),
}

impl UniformValue {
    /// Append this value's floats to `out` (textures add nothing)
    fn pack_into(&self, out: &mut Vec<f32>) {
        match self {
            UniformValue::Float(v) => out.push(*v),
            UniformValue::Vec2(v) => out.extend_from_slice(v),
            UniformValue::Vec3(v) => out.extend_from_slice(v),
            UniformValue::Vec4(v) => out.extend_from_slice(v),
            UniformValue::Int(v) => out.push(*v as f32),
            UniformValue::FloatArray(v) => out.extend_from_slice(v),
            UniformValue::Texture(_) => {}
        }
    }
}

/// Uniforms recorded for one pipeline
#[derive(Debug, Clone, Default)]
pub struct UniformSet {
    name: String,
    values: BTreeMap<String, UniformValue>,
}

impl UniformSet {
    /// Create an empty set for the named pipeline
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        self.values.get(name)
    }

    /// Get a scalar float uniform
    pub fn get_f32(&self, name: &str) -> Option<f32> {
        match self.values.get(name) {
            Some(UniformValue::Float(v)) => Some(*v),
            _ => None,
        }
    }

    /// Get an integer uniform
    pub fn get_i32(&self, name: &str) -> Option<i32> {
        match self.values.get(name) {
            Some(UniformValue::Int(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Flatten all numeric uniforms into one float block, in name order
    pub fn packed(&self) -> Vec<f32> {
        let mut out = Vec::new();
        for value in self.values.values() {
            value.pack_into(&mut out);
        }
        out
    }

    /// The packed block as bytes, ready for a buffer upload
    pub fn as_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.packed()).to_vec()
    }

    fn record(&mut self, name: &str, value: UniformValue) {
        tracing::trace!(pipeline = %self.name, uniform = name, ?value, "Uniform set");
        self.values.insert(name.to_string(), value);
    }
}

impl FxPipeline for UniformSet {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_float1(&mut self, name: &str, x: f32) {
        self.record(name, UniformValue::Float(x));
    }

    fn set_float2(&mut self, name: &str, x: f32, y: f32) {
        self.record(name, UniformValue::Vec2([x, y]));
    }

    fn set_float3(&mut self, name: &str, x: f32, y: f32, z: f32) {
        self.record(name, UniformValue::Vec3([x, y, z]));
    }

    fn set_float4(&mut self, name: &str, x: f32, y: f32, z: f32, w: f32) {
        self.record(name, UniformValue::Vec4([x, y, z, w]));
    }

    fn set_int1(&mut self, name: &str, x: i32) {
        self.record(name, UniformValue::Int(x));
    }

    fn set_float_array(&mut self, name: &str, values: &[f32]) {
        self.record(name, UniformValue::FloatArray(values.to_vec()));
    }

    fn set_texture(&mut self, name: &str, frame: &TextureFrame) {
        self.record(name, UniformValue::Texture(frame.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_overwrite() {
        let mut set = UniformSet::new("FxPipeline");
        set.set_float1("strength", 1.0);
        set.set_float1("strength", 2.0);
        set.set_bool("knockout", true);

        assert_eq!(set.len(), 2);
        assert_eq!(set.get_f32("strength"), Some(2.0));
        assert_eq!(set.get_i32("knockout"), Some(1));
        assert_eq!(set.name(), "FxPipeline");
    }

    #[test]
    fn test_packed_in_name_order() {
        let mut set = UniformSet::new("FxPipeline");
        set.set_float2("b", 2.0, 3.0);
        set.set_float1("a", 1.0);
        set.set_texture("c", &TextureFrame::new("__WHITE", "__BASE", 4, 4));
        set.set_int1("d", 4);

        assert_eq!(set.packed(), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(set.as_bytes().len(), 16);
    }
}

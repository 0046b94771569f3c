use crate::resources::ResourceValue;

/// Deep-merge `overlay` into `base`, in place.
///
/// Where both sides are mappings, keys are merged recursively with `overlay`
/// taking precedence. Anywhere else the overlay value replaces the base value
/// whole; sequences are never merged element-wise.
///
/// # Example
///
/// ```
/// use cldr_core::{ResourceValue, deep_merge};
///
/// let mut base = ResourceValue::mapping([("a", ResourceValue::sequence([1.into(), 2.into()]))]);
/// deep_merge(&mut base, ResourceValue::mapping([("a", ResourceValue::sequence([9.into()]))]));
/// assert_eq!(base, ResourceValue::mapping([("a", ResourceValue::sequence([9.into()]))]));
/// ```
pub fn deep_merge(base: &mut ResourceValue, overlay: ResourceValue) {
    match (base, overlay) {
        (ResourceValue::Mapping(base_map), ResourceValue::Mapping(overlay_map)) => {
            for (key, value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

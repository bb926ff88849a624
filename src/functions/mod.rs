use serde_json::Value;
use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::Arc;
use crate::errors::{PolyfillError, Result};

/// Trait for helpers callable by name with JSON arguments.
pub trait Function: Send + Sync {
    fn name(&self) -> &'static str;
    fn arity(&self) -> RangeInclusive<usize>;
    fn call(&self, args: &[Value]) -> Result<Value>;
}

/// Thread-safe function registry.
#[derive(Clone, Default)]
pub struct Registry {
    inner: Arc<HashMap<&'static str, Arc<dyn Function>>>,
}

impl Registry {
    pub fn new() -> Self { Self::default() }

    pub fn with_builtins() -> Self {
        let mut reg = Self::new();
        reg.register(builtins::White);
        reg.register(builtins::Black);
        reg.register(builtins::Template);
        reg.register(builtins::Render);
        reg.register(builtins::ToTitle);
        reg.register(builtins::Zpad);
        reg.register(builtins::IsDefined);
        reg.register(builtins::Portable);
        reg.register(builtins::MakeArray);
        reg.register(builtins::ToMap);
        reg.register(builtins::Unique);
        reg.register(builtins::Remove);
        reg.register(builtins::Append);
        reg.register(builtins::Rotate);
        reg.register(builtins::KeyFields);
        reg.register(builtins::Currency);
        reg.register(builtins::Money);
        reg.register(builtins::Round);
        reg.register(builtins::Serialize);
        reg.register(builtins::Dump);
        reg
    }

    pub fn register<F: Function + 'static>(&mut self, f: F) {
        let mut_map = Arc::make_mut(&mut self.inner);
        mut_map.insert(f.name(), Arc::new(f));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Function>> {
        self.inner.get(name).cloned()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.inner.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Look up `name`, check the argument count, and invoke it.
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Value> {
        let f = self
            .get(name)
            .ok_or_else(|| PolyfillError::UnknownFunction(name.to_string()))?;
        let arity = f.arity();
        if !arity.contains(&args.len()) {
            let expected = if arity.start() == arity.end() {
                arity.start().to_string()
            } else {
                format!("{}..={}", arity.start(), arity.end())
            };
            return Err(PolyfillError::Arity { name: name.to_string(), expected, got: args.len() });
        }
        tracing::debug!(function = name, args = args.len(), "dispatch");
        f.call(args)
    }
}

pub mod builtins {
    use super::*;
    use crate::context::{Context, MissingPolicy};
    use crate::mask::FieldMask;
    use crate::{arrays, numbers, project, serialize, strings, template};

    fn bad(name: &str, reason: impl Into<String>) -> PolyfillError {
        PolyfillError::InvalidArgument { name: name.to_string(), reason: reason.into() }
    }

    fn str_arg<'a>(name: &str, args: &'a [Value], i: usize) -> Result<&'a str> {
        args.get(i)
            .and_then(Value::as_str)
            .ok_or_else(|| bad(name, format!("argument {} must be a string", i + 1)))
    }

    fn f64_arg(name: &str, args: &[Value], i: usize) -> Result<f64> {
        args.get(i)
            .and_then(Value::as_f64)
            .ok_or_else(|| bad(name, format!("argument {} must be a number", i + 1)))
    }

    fn uint_arg(name: &str, args: &[Value], i: usize, default: u64) -> Result<u64> {
        match args.get(i) {
            None => Ok(default),
            Some(v) => v
                .as_u64()
                .ok_or_else(|| bad(name, format!("argument {} must be a non-negative integer", i + 1))),
        }
    }

    fn places_arg(name: &str, args: &[Value], i: usize, default: u32) -> Result<u32> {
        let raw = uint_arg(name, args, i, u64::from(default))?;
        u32::try_from(raw).map_err(|_| bad(name, format!("places out of range: {raw}")))
    }

    fn index_arg(name: &str, args: &[Value], i: usize) -> Result<usize> {
        let raw = uint_arg(name, args, i, 0)?;
        usize::try_from(raw).map_err(|_| bad(name, format!("argument {} out of range: {raw}", i + 1)))
    }

    fn array_arg<'a>(name: &str, args: &'a [Value], i: usize) -> Result<&'a [Value]> {
        args.get(i)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .ok_or_else(|| bad(name, format!("argument {} must be an array", i + 1)))
    }

    fn mask_arg(args: &[Value], i: usize) -> Result<FieldMask> {
        FieldMask::try_from(arg(args, i))
    }

    static NULL: Value = Value::Null;

    fn arg(args: &[Value], i: usize) -> &Value {
        args.get(i).unwrap_or(&NULL)
    }

    pub struct White;
    impl Function for White {
        fn name(&self) -> &'static str { "white" }
        fn arity(&self) -> RangeInclusive<usize> { 2..=2 }
        fn call(&self, args: &[Value]) -> Result<Value> {
            Ok(project::white(arg(args, 0), &mask_arg(args, 1)?))
        }
    }

    pub struct Black;
    impl Function for Black {
        fn name(&self) -> &'static str { "black" }
        fn arity(&self) -> RangeInclusive<usize> { 2..=2 }
        fn call(&self, args: &[Value]) -> Result<Value> {
            Ok(project::black(arg(args, 0), &mask_arg(args, 1)?))
        }
    }

    pub struct Template;
    impl Function for Template {
        fn name(&self) -> &'static str { "template" }
        fn arity(&self) -> RangeInclusive<usize> { 1..=2 }
        fn call(&self, args: &[Value]) -> Result<Value> {
            let s = str_arg(self.name(), args, 0)?;
            let out = match arg(args, 1) {
                Value::Object(ctx) => template::interpolate(s, ctx),
                _ => template::interpolate(s, &Default::default()),
            };
            Ok(Value::String(out))
        }
    }

    /// `render(template, [scopes...], "blank" | "keep")`
    pub struct Render;
    impl Function for Render {
        fn name(&self) -> &'static str { "render" }
        fn arity(&self) -> RangeInclusive<usize> { 2..=3 }
        fn call(&self, args: &[Value]) -> Result<Value> {
            let s = str_arg(self.name(), args, 0)?;
            let policy = match args.get(2) {
                None => MissingPolicy::default(),
                Some(v) => serde_json::from_value::<MissingPolicy>(v.clone())
                    .map_err(|e| bad(self.name(), e.to_string()))?,
            };
            let ctx = arrays::make_array(arg(args, 1))
                .iter()
                .fold(Context::new().with_policy(policy), |ctx, scope| ctx.push(scope));
            Ok(Value::String(template::render(s, &ctx)))
        }
    }

    pub struct ToTitle;
    impl Function for ToTitle {
        fn name(&self) -> &'static str { "to_title" }
        fn arity(&self) -> RangeInclusive<usize> { 1..=1 }
        fn call(&self, args: &[Value]) -> Result<Value> {
            Ok(match arg(args, 0) {
                Value::String(s) => Value::String(strings::to_title(s)),
                _ => Value::String(String::new()),
            })
        }
    }

    pub struct Zpad;
    impl Function for Zpad {
        fn name(&self) -> &'static str { "zpad" }
        fn arity(&self) -> RangeInclusive<usize> { 2..=2 }
        fn call(&self, args: &[Value]) -> Result<Value> {
            let size = index_arg(self.name(), args, 1)?;
            Ok(Value::String(strings::zpad(arg(args, 0), size)))
        }
    }

    pub struct IsDefined;
    impl Function for IsDefined {
        fn name(&self) -> &'static str { "is_defined" }
        fn arity(&self) -> RangeInclusive<usize> { 1..=1 }
        fn call(&self, args: &[Value]) -> Result<Value> {
            Ok(Value::Bool(strings::is_defined(arg(args, 0))))
        }
    }

    pub struct Portable;
    impl Function for Portable {
        fn name(&self) -> &'static str { "portable" }
        fn arity(&self) -> RangeInclusive<usize> { 1..=1 }
        fn call(&self, args: &[Value]) -> Result<Value> {
            Ok(Value::String(strings::portable(str_arg(self.name(), args, 0)?)))
        }
    }

    pub struct MakeArray;
    impl Function for MakeArray {
        fn name(&self) -> &'static str { "make_array" }
        fn arity(&self) -> RangeInclusive<usize> { 1..=1 }
        fn call(&self, args: &[Value]) -> Result<Value> {
            Ok(Value::Array(arrays::make_array(arg(args, 0))))
        }
    }

    /// `to_map(items, property?, indexed?)`
    pub struct ToMap;
    impl Function for ToMap {
        fn name(&self) -> &'static str { "to_map" }
        fn arity(&self) -> RangeInclusive<usize> { 1..=3 }
        fn call(&self, args: &[Value]) -> Result<Value> {
            let items = array_arg(self.name(), args, 0)?;
            let property = arg(args, 1).as_str();
            let indexed = arg(args, 2).as_bool().unwrap_or(false);
            Ok(Value::Object(arrays::to_map(items, property, indexed)))
        }
    }

    pub struct Unique;
    impl Function for Unique {
        fn name(&self) -> &'static str { "unique" }
        fn arity(&self) -> RangeInclusive<usize> { 1..=1 }
        fn call(&self, args: &[Value]) -> Result<Value> {
            Ok(Value::Array(arrays::unique(array_arg(self.name(), args, 0)?)))
        }
    }

    pub struct Remove;
    impl Function for Remove {
        fn name(&self) -> &'static str { "remove" }
        fn arity(&self) -> RangeInclusive<usize> { 2..=2 }
        fn call(&self, args: &[Value]) -> Result<Value> {
            let items = array_arg(self.name(), args, 0)?;
            let set = array_arg(self.name(), args, 1)?;
            Ok(Value::Array(arrays::remove(items, set)))
        }
    }

    pub struct Append;
    impl Function for Append {
        fn name(&self) -> &'static str { "append" }
        fn arity(&self) -> RangeInclusive<usize> { 2..=2 }
        fn call(&self, args: &[Value]) -> Result<Value> {
            let items = array_arg(self.name(), args, 0)?;
            let other = array_arg(self.name(), args, 1)?;
            Ok(Value::Array(arrays::append(items, other)))
        }
    }

    pub struct Rotate;
    impl Function for Rotate {
        fn name(&self) -> &'static str { "rotate" }
        fn arity(&self) -> RangeInclusive<usize> { 2..=2 }
        fn call(&self, args: &[Value]) -> Result<Value> {
            let items = array_arg(self.name(), args, 0)?;
            let n = index_arg(self.name(), args, 1)?;
            Ok(Value::Array(arrays::rotate(items, n)))
        }
    }

    pub struct KeyFields;
    impl Function for KeyFields {
        fn name(&self) -> &'static str { "key_fields" }
        fn arity(&self) -> RangeInclusive<usize> { 2..=2 }
        fn call(&self, args: &[Value]) -> Result<Value> {
            let property = str_arg(self.name(), args, 1)?;
            Ok(match arg(args, 0) {
                Value::Object(m) => Value::Array(arrays::key_fields(m, property)),
                _ => Value::Array(Vec::new()),
            })
        }
    }

    pub struct Currency;
    impl Function for Currency {
        fn name(&self) -> &'static str { "currency" }
        fn arity(&self) -> RangeInclusive<usize> { 1..=2 }
        fn call(&self, args: &[Value]) -> Result<Value> {
            let x = f64_arg(self.name(), args, 0)?;
            let places = places_arg(self.name(), args, 1, 2)?;
            Ok(Value::from(numbers::currency(x, places)?))
        }
    }

    pub struct Money;
    impl Function for Money {
        fn name(&self) -> &'static str { "money" }
        fn arity(&self) -> RangeInclusive<usize> { 1..=2 }
        fn call(&self, args: &[Value]) -> Result<Value> {
            let x = f64_arg(self.name(), args, 0)?;
            let places = places_arg(self.name(), args, 1, 2)?;
            Ok(Value::String(numbers::money(x, places)?))
        }
    }

    pub struct Round;
    impl Function for Round {
        fn name(&self) -> &'static str { "round" }
        fn arity(&self) -> RangeInclusive<usize> { 1..=2 }
        fn call(&self, args: &[Value]) -> Result<Value> {
            let x = f64_arg(self.name(), args, 0)?;
            let places = places_arg(self.name(), args, 1, 12)?;
            Ok(Value::from(numbers::round(x, places)?))
        }
    }

    pub struct Serialize;
    impl Function for Serialize {
        fn name(&self) -> &'static str { "serialize" }
        fn arity(&self) -> RangeInclusive<usize> { 1..=2 }
        fn call(&self, args: &[Value]) -> Result<Value> {
            let pretty = arg(args, 1).as_bool().unwrap_or(false);
            Ok(Value::String(serialize::serialize(arg(args, 0), pretty)?))
        }
    }

    pub struct Dump;
    impl Function for Dump {
        fn name(&self) -> &'static str { "dump" }
        fn arity(&self) -> RangeInclusive<usize> { 0..=usize::MAX }
        fn call(&self, args: &[Value]) -> Result<Value> {
            Ok(Value::String(serialize::dump(args)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    struct Shout;
    impl Function for Shout {
        fn name(&self) -> &'static str { "shout" }
        fn arity(&self) -> RangeInclusive<usize> { 1..=1 }
        fn call(&self, args: &[Value]) -> Result<Value> {
            Ok(Value::String(args[0].as_str().unwrap_or_default().to_uppercase()))
        }
    }

    #[test]
    fn custom_function_registration() {
        let mut reg = Registry::new();
        reg.register(Shout);
        assert_eq!(reg.call("shout", &[json!("hi")]).unwrap(), json!("HI"));
        assert_eq!(reg.names(), vec!["shout"]);
    }

    #[test]
    fn register_does_not_affect_clones() {
        let base = Registry::with_builtins();
        let mut extended = base.clone();
        extended.register(Shout);
        assert!(base.get("shout").is_none());
        assert!(extended.get("shout").is_some());
    }

    #[test]
    fn arity_is_checked() {
        let reg = Registry::with_builtins();
        let err = reg.call("white", &[json!({})]).unwrap_err();
        assert_eq!(err.to_string(), "white expects 2 argument(s), got 1");
        let err = reg.call("to_map", &[]).unwrap_err();
        assert_eq!(err.to_string(), "to_map expects 1..=3 argument(s), got 0");
    }

    #[test]
    fn unknown_function() {
        let err = Registry::with_builtins().call("nope", &[]).unwrap_err();
        assert!(matches!(err, PolyfillError::UnknownFunction(n) if n == "nope"));
    }

    #[test]
    fn wrong_argument_types() {
        let reg = Registry::with_builtins();
        let err = reg.call("money", &[json!("x")]).unwrap_err();
        assert!(matches!(err, PolyfillError::InvalidArgument { .. }));
        let err = reg.call("white", &[json!({"a": 1}), json!(3)]).unwrap_err();
        assert!(matches!(err, PolyfillError::InvalidMask(_)));
        let err = reg.call("render", &[json!("x"), json!([]), json!("sometimes")]).unwrap_err();
        assert!(matches!(err, PolyfillError::InvalidArgument { .. }));
    }

    #[test]
    fn places_out_of_range_rejected() {
        let reg = Registry::with_builtins();
        for (name, places) in [
            ("money", json!(4294967297u64)),
            ("currency", json!(3000000000u64)),
            ("money", json!(400)),
            ("round", json!(1_000_000_000)),
        ] {
            let err = reg.call(name, &[json!(1.2345), places.clone()]).unwrap_err();
            assert!(
                matches!(err, PolyfillError::InvalidArgument { .. }),
                "{name}({places}) should fail, got: {err}"
            );
        }
        assert_eq!(reg.call("money", &[json!(1.25), json!(1)]).unwrap(), json!("1.3"));
    }
}

//! Function objects
//!
//! Script functions carry their kind and source text but no executable body;
//! only native functions can be called.

use std::fmt;
use std::rc::Rc;

use crate::error::JsResult;
use crate::value::JsValue;

/// Native function implementation: `(this, arguments) -> result`
pub type NativeFn = Rc<dyn Fn(&JsValue, &[JsValue]) -> JsResult<JsValue>>;

/// How a function was declared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    /// `function f() {}`
    Normal,
    /// `() => {}`
    Arrow,
    /// `class C {}`
    Class,
    /// `async function f() {}` or `async () => {}`
    Async,
    /// `function* g() {}`
    Generator,
    /// `async function* g() {}`
    AsyncGenerator,
    /// Built into the host
    Native,
}

impl FunctionKind {
    /// Class tag reported by `Object.prototype.toString`
    pub fn tag(&self) -> &'static str {
        match self {
            FunctionKind::Async => "AsyncFunction",
            FunctionKind::Generator => "GeneratorFunction",
            FunctionKind::AsyncGenerator => "AsyncGeneratorFunction",
            FunctionKind::Normal
            | FunctionKind::Arrow
            | FunctionKind::Class
            | FunctionKind::Native => "Function",
        }
    }

    /// Source text the host synthesizes for a function of this kind
    pub fn default_source(&self, name: &str) -> String {
        match self {
            FunctionKind::Normal => format!("function {}() {{}}", name),
            FunctionKind::Arrow => "() => {}".to_string(),
            FunctionKind::Class => format!("class {} {{}}", name),
            FunctionKind::Async => format!("async function {}() {{}}", name),
            FunctionKind::Generator => format!("function* {}() {{}}", name),
            FunctionKind::AsyncGenerator => format!("async function* {}() {{}}", name),
            FunctionKind::Native => format!("function {}() {{ [native code] }}", name),
        }
    }
}

/// Internal function data
#[derive(Clone)]
pub struct FunctionData {
    /// Declaration kind
    pub kind: FunctionKind,
    /// The function's `name`
    pub name: String,
    /// Text returned by `Function.prototype.toString`
    pub source: String,
    /// Implementation, present only for native functions
    pub native: Option<NativeFn>,
}

impl FunctionData {
    /// Script function with host-synthesized source text
    pub fn script(kind: FunctionKind, name: impl Into<String>) -> Self {
        let name = name.into();
        FunctionData {
            source: kind.default_source(&name),
            kind,
            name,
            native: None,
        }
    }

    /// Native function backed by a Rust closure
    pub fn native<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&JsValue, &[JsValue]) -> JsResult<JsValue> + 'static,
    {
        let name = name.into();
        FunctionData {
            source: FunctionKind::Native.default_source(&name),
            kind: FunctionKind::Native,
            name,
            native: Some(Rc::new(func)),
        }
    }
}

impl fmt::Debug for FunctionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionData")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .finish()
    }
}

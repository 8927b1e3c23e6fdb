//! Settings: the nodes of a configuration tree.
//!
//! A [`Setting`] is a handle to one node of the tree. Handles are cheap to
//! clone and alias the live tree: a value set through one handle is
//! immediately visible through every other handle to the same node.
//!
//! # Ownership
//!
//! Each node owns its children. A node refers back to its parent through a
//! weak reference only, so the tree has no ownership cycles and dropping a
//! subtree never walks upward. A handle keeps its own node (and that node's
//! subtree) alive, but not its ancestors; once the owning tree is dropped or
//! replaced, [`Setting::parent`] of a former member returns `None`.
//!
//! # Threading
//!
//! Handles are `!Send` and `!Sync`. The tree performs no internal
//! synchronization; all access to one tree must happen on one thread.
//!
//! # Usage
//!
//! ```
//! use libconf::Config;
//!
//! let config: Config = "server: { port = 8080; };".parse()?;
//! let port = config.lookup("server.port").expect("port is set");
//! port.set_int(9090)?;
//!
//! let server = config.lookup("server").expect("server is set");
//! assert_eq!(server.lookup_int("port")?, 9090);
//! # Ok::<(), libconf::Error>(())
//! ```

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use serde::{Serialize, Serializer, ser::SerializeMap, ser::SerializeSeq};
use tracing::{debug, trace};

pub mod errors;
pub mod path;
pub mod value;

pub use errors::SettingError;
pub use path::{Component, Path, PathBuf, PathError};
pub use value::{Kind, ScalarKind, Value};

type NodeRef = Rc<RefCell<Node>>;

/// Storage for a single node.
#[derive(Debug)]
struct Node {
    /// `None` for the root and for list/array elements
    name: Option<String>,
    /// `None` only for a root
    parent: Option<Weak<RefCell<Node>>>,
    payload: Payload,
    /// 1-based source line, for parsed settings
    line: Option<usize>,
}

/// The kind-tagged contents of a node. The variant never changes after the
/// node is created.
#[derive(Debug)]
enum Payload {
    Scalar(Value),
    Group(Vec<NodeRef>),
    List(Vec<NodeRef>),
    Array(Vec<NodeRef>),
}

impl Payload {
    fn empty(kind: Kind) -> Self {
        match (kind, kind.as_scalar()) {
            (_, Some(scalar)) => Payload::Scalar(scalar.default_value()),
            (Kind::List, None) => Payload::List(Vec::new()),
            (Kind::Array, None) => Payload::Array(Vec::new()),
            (_, None) => Payload::Group(Vec::new()),
        }
    }

    fn kind(&self) -> Kind {
        match self {
            Payload::Scalar(value) => value.kind(),
            Payload::Group(_) => Kind::Group,
            Payload::List(_) => Kind::List,
            Payload::Array(_) => Kind::Array,
        }
    }

    fn children(&self) -> Option<&Vec<NodeRef>> {
        match self {
            Payload::Scalar(_) => None,
            Payload::Group(children) | Payload::List(children) | Payload::Array(children) => {
                Some(children)
            }
        }
    }
}

/// A handle to a setting in a configuration tree.
///
/// See the [module documentation](self) for the aliasing and ownership
/// rules.
#[derive(Clone)]
pub struct Setting {
    node: NodeRef,
}

impl Setting {
    /// Creates a new, unnamed, empty root group.
    pub(crate) fn new_root() -> Self {
        Setting {
            node: Rc::new(RefCell::new(Node {
                name: None,
                parent: None,
                payload: Payload::Group(Vec::new()),
                line: None,
            })),
        }
    }

    fn from_node(node: &NodeRef) -> Self {
        Setting {
            node: Rc::clone(node),
        }
    }

    // ===== INTROSPECTION =====

    /// Returns the member name, or `None` for the root and for list/array
    /// elements.
    pub fn name(&self) -> Option<String> {
        self.node.borrow().name.clone()
    }

    /// Returns the kind of this setting. It never changes.
    pub fn kind(&self) -> Kind {
        self.node.borrow().payload.kind()
    }

    pub fn is_group(&self) -> bool {
        self.kind() == Kind::Group
    }

    pub fn is_list(&self) -> bool {
        self.kind() == Kind::List
    }

    pub fn is_array(&self) -> bool {
        self.kind() == Kind::Array
    }

    pub fn is_scalar(&self) -> bool {
        self.kind().is_scalar()
    }

    pub fn is_aggregate(&self) -> bool {
        self.kind().is_aggregate()
    }

    /// Returns true if this setting is the root of its tree.
    pub fn is_root(&self) -> bool {
        self.node.borrow().parent.is_none()
    }

    /// Returns the containing setting, or `None` for the root or when the
    /// owning tree no longer exists.
    pub fn parent(&self) -> Option<Setting> {
        let parent = self.node.borrow().parent.as_ref()?.upgrade()?;
        Some(Setting { node: parent })
    }

    /// Returns the position of this setting within its parent.
    pub fn index(&self) -> Option<usize> {
        let parent = self.parent()?;
        let parent = parent.node.borrow();
        parent
            .payload
            .children()?
            .iter()
            .position(|child| Rc::ptr_eq(child, &self.node))
    }

    /// Returns the 1-based line this setting was parsed from.
    ///
    /// Settings created programmatically have no source line.
    pub fn source_line(&self) -> Option<usize> {
        self.node.borrow().line
    }

    pub(crate) fn set_source_line(&self, line: usize) {
        self.node.borrow_mut().line = Some(line);
    }

    /// Returns the full dotted path from the root to this setting.
    ///
    /// The root's path is empty. Settings inside a list or array, and
    /// settings of a tree that no longer exists, have no path.
    pub fn path(&self) -> Option<PathBuf> {
        let mut names = Vec::new();
        let mut current = self.clone();
        while !current.is_root() {
            let parent = current.parent()?;
            if !parent.is_group() {
                return None;
            }
            names.push(current.name()?);
            current = parent;
        }
        Some(names.iter().rev().fold(PathBuf::new(), |path, name| path.push(name)))
    }

    /// Human-readable location for error messages.
    fn describe(&self) -> String {
        if let Some(path) = self.path() {
            return path.to_string();
        }
        let Some(parent) = self.parent() else {
            return self.name().unwrap_or_else(|| "(detached)".to_string());
        };
        match (self.name(), self.index()) {
            (Some(name), _) => format!("{}.{name}", parent.describe()),
            (None, Some(index)) => format!("{}[{index}]", parent.describe()),
            (None, None) => parent.describe(),
        }
    }

    /// The path of `relative` below this setting, for error messages.
    fn qualify(&self, relative: &Path) -> String {
        match self.path() {
            Some(base) => base.push(relative.as_str()).to_string(),
            None => format!("{}.{}", self.describe(), relative.to_path_buf()),
        }
    }

    fn mismatch(&self, expected: Kind) -> SettingError {
        SettingError::TypeMismatch {
            path: self.describe(),
            expected,
            actual: self.kind(),
        }
    }

    /// Returns true if both handles refer to the same node.
    pub fn ptr_eq(&self, other: &Setting) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    // ===== POSITIONAL ACCESS =====

    /// Number of children of a group, list or array; 0 for scalars.
    pub fn len(&self) -> usize {
        self.node
            .borrow()
            .payload
            .children()
            .map_or(0, |children| children.len())
    }

    /// Returns true if this setting has no children.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the child at `index`. Group members are kept in the order
    /// they were added.
    pub fn element(&self, index: usize) -> Option<Setting> {
        let node = self.node.borrow();
        node.payload.children()?.get(index).map(Setting::from_node)
    }

    /// Returns handles to all children, in order.
    pub fn children(&self) -> Vec<Setting> {
        let node = self.node.borrow();
        node.payload
            .children()
            .map(|children| children.iter().map(Setting::from_node).collect())
            .unwrap_or_default()
    }

    // ===== LOOKUP =====

    /// Finds a direct member of this group by exact name.
    ///
    /// Returns `None` if this setting is not a group or has no such member.
    pub fn lookup_child(&self, name: &str) -> Option<Setting> {
        let node = self.node.borrow();
        let Payload::Group(members) = &node.payload else {
            return None;
        };
        members
            .iter()
            .find(|member| member.borrow().name.as_deref() == Some(name))
            .map(Setting::from_node)
    }

    /// Resolves a dotted path relative to this setting.
    ///
    /// The empty path resolves to this setting. Returns `None` if any
    /// segment is missing or passes through a setting that is not a group.
    pub fn lookup(&self, path: impl AsRef<Path>) -> Option<Setting> {
        let path = path.as_ref();
        let mut current = self.clone();
        for segment in path.components() {
            match current.lookup_child(segment) {
                Some(next) => current = next,
                None => {
                    trace!(path = %path, segment, "Setting lookup miss");
                    return None;
                }
            }
        }
        Some(current)
    }

    /// Like [`lookup`](Self::lookup), but reports a missing setting as
    /// [`SettingError::NotFound`].
    pub fn require(&self, path: impl AsRef<Path>) -> Result<Setting, SettingError> {
        let path = path.as_ref();
        self.lookup(path).ok_or_else(|| SettingError::NotFound {
            path: self.qualify(path),
        })
    }

    pub fn lookup_int(&self, path: impl AsRef<Path>) -> Result<i64, SettingError> {
        self.require(path)?.get_int()
    }

    pub fn lookup_float(&self, path: impl AsRef<Path>) -> Result<f64, SettingError> {
        self.require(path)?.get_float()
    }

    pub fn lookup_bool(&self, path: impl AsRef<Path>) -> Result<bool, SettingError> {
        self.require(path)?.get_bool()
    }

    pub fn lookup_string(&self, path: impl AsRef<Path>) -> Result<String, SettingError> {
        self.require(path)?.get_string()
    }

    // ===== TYPED ACCESS =====

    /// Returns a snapshot of the scalar payload, or `None` for containers.
    pub fn value(&self) -> Option<Value> {
        match &self.node.borrow().payload {
            Payload::Scalar(value) => Some(value.clone()),
            _ => None,
        }
    }

    /// Returns the integer value.
    ///
    /// # Errors
    /// [`SettingError::TypeMismatch`] unless this is an `Int` setting. A
    /// `Float` setting is not converted.
    pub fn get_int(&self) -> Result<i64, SettingError> {
        self.value()
            .and_then(|value| value.as_int())
            .ok_or_else(|| self.mismatch(Kind::Int))
    }

    /// Returns the float value. An `Int` setting is not converted.
    pub fn get_float(&self) -> Result<f64, SettingError> {
        self.value()
            .and_then(|value| value.as_float())
            .ok_or_else(|| self.mismatch(Kind::Float))
    }

    pub fn get_bool(&self) -> Result<bool, SettingError> {
        self.value()
            .and_then(|value| value.as_bool())
            .ok_or_else(|| self.mismatch(Kind::Bool))
    }

    pub fn get_string(&self) -> Result<String, SettingError> {
        match self.value() {
            Some(Value::String(s)) => Ok(s),
            _ => Err(self.mismatch(Kind::String)),
        }
    }

    /// Replaces the scalar payload in place.
    ///
    /// The value must be of this setting's kind; on mismatch the stored
    /// value is left untouched and [`SettingError::TypeMismatch`] is
    /// returned.
    pub fn set_value(&self, value: impl Into<Value>) -> Result<(), SettingError> {
        let value = value.into();
        let expected = value.kind();
        let applied = {
            let mut node = self.node.borrow_mut();
            match &mut node.payload {
                Payload::Scalar(current) if current.kind() == expected => {
                    *current = value;
                    true
                }
                _ => false,
            }
        };
        if applied {
            Ok(())
        } else {
            Err(self.mismatch(expected))
        }
    }

    pub fn set_int(&self, value: i64) -> Result<(), SettingError> {
        self.set_value(Value::Int(value))
    }

    pub fn set_float(&self, value: f64) -> Result<(), SettingError> {
        self.set_value(Value::Float(value))
    }

    pub fn set_bool(&self, value: bool) -> Result<(), SettingError> {
        self.set_value(Value::Bool(value))
    }

    pub fn set_string(&self, value: impl Into<String>) -> Result<(), SettingError> {
        self.set_value(Value::String(value.into()))
    }

    // ===== GROWTH =====

    /// Appends a new member named `name` of the given kind to this group.
    ///
    /// Scalars start out with their kind's zero value; containers start
    /// empty. Returns a handle to the new member.
    ///
    /// # Errors
    /// - [`SettingError::InvalidName`] if `name` is not a valid setting name
    /// - [`SettingError::TypeMismatch`] if this setting is not a group
    /// - [`SettingError::DuplicateName`] if the group already has `name`
    pub fn add_child(&self, name: &str, kind: Kind) -> Result<Setting, SettingError> {
        let name = Component::new(name)?;
        if !self.is_group() {
            return Err(self.mismatch(Kind::Group));
        }
        if self.lookup_child(name.as_str()).is_some() {
            return Err(SettingError::DuplicateName {
                parent: self.describe(),
                name: name.into_string(),
            });
        }

        let child = self.attach(Some(name.into_string()), kind)?;
        debug!(parent = %self.describe(), name = ?child.name(), %kind, "Added setting");
        Ok(child)
    }

    /// Appends a new unnamed element of the given kind to this list or
    /// array.
    ///
    /// Lists accept any kind. Arrays accept scalars only, and only of the
    /// kind of the elements already present.
    pub fn add_element(&self, kind: Kind) -> Result<Setting, SettingError> {
        match self.kind() {
            Kind::List => {}
            Kind::Array => {
                let existing = self.element(0).map(|first| first.kind());
                let compatible = kind.is_scalar() && existing.is_none_or(|first| first == kind);
                if !compatible {
                    return Err(SettingError::ElementKind {
                        path: self.describe(),
                        expected: existing,
                        actual: kind,
                    });
                }
            }
            _ => return Err(self.mismatch(Kind::List)),
        }
        self.attach(None, kind)
    }

    /// Creates a child node and links it below this container.
    ///
    /// Fails without creating anything if this setting is a scalar.
    fn attach(&self, name: Option<String>, kind: Kind) -> Result<Setting, SettingError> {
        let expected = if name.is_some() { Kind::Group } else { Kind::List };
        let child = Rc::new(RefCell::new(Node {
            name,
            parent: Some(Rc::downgrade(&self.node)),
            payload: Payload::empty(kind),
            line: None,
        }));
        let linked = match &mut self.node.borrow_mut().payload {
            Payload::Group(children) | Payload::List(children) | Payload::Array(children) => {
                children.push(Rc::clone(&child));
                true
            }
            Payload::Scalar(_) => false,
        };
        if !linked {
            return Err(self.mismatch(expected));
        }
        Ok(Setting { node: child })
    }

    // ===== EXPORT =====

    /// Renders this setting and everything below it as pretty-printed JSON.
    ///
    /// Groups become objects, lists and arrays become arrays. JSON has no
    /// infinities or NaN, so a non-finite float anywhere in the subtree is
    /// an [`Error::Serialize`](crate::Error::Serialize) naming the setting.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Debug for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Setting")
            .field("path", &self.describe())
            .field("kind", &self.kind())
            .field("value", &self.value())
            .finish()
    }
}

impl Serialize for Setting {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node = self.node.borrow();
        match &node.payload {
            Payload::Scalar(Value::Float(n)) if !n.is_finite() => {
                Err(<S::Error as serde::ser::Error>::custom(format!(
                    "Setting {} holds non-finite float {n}",
                    self.describe()
                )))
            }
            Payload::Scalar(value) => value.serialize(serializer),
            Payload::Group(members) => {
                let mut map = serializer.serialize_map(Some(members.len()))?;
                for member in members {
                    let member = Setting::from_node(member);
                    map.serialize_entry(&member.name().unwrap_or_default(), &member)?;
                }
                map.end()
            }
            Payload::List(elements) | Payload::Array(elements) => {
                let mut seq = serializer.serialize_seq(Some(elements.len()))?;
                for element in elements {
                    seq.serialize_element(&Setting::from_node(element))?;
                }
                seq.end()
            }
        }
    }
}

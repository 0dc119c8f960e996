use std::{cell::RefCell, fmt::Display, rc::Rc};

use super::node::Node;

/// A variable shared between the scope and every node referencing it.
pub type VariableRef = Rc<RefCell<Variable>>;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum VariableType {
    Bool,
    Int,
    UInt,
    Float,
    Double,
    Vector,
}

impl VariableType {
    /// Scalar type keyword, as written in source.
    pub fn from_keyword(keyword: &str) -> Option<VariableType> {
        match keyword {
            "bool" => Some(VariableType::Bool),
            "int" => Some(VariableType::Int),
            "uint" => Some(VariableType::UInt),
            "float" => Some(VariableType::Float),
            "double" => Some(VariableType::Double),
            _ => None,
        }
    }

    /// Element type of a vector keyword, decoded from its prefix letter
    /// (`bvec`, `ivec`, `uvec`, `dvec`, plain `vec` is float).
    pub fn from_vector_prefix(prefix: char) -> VariableType {
        match prefix {
            'b' => VariableType::Bool,
            'i' => VariableType::Int,
            'u' => VariableType::UInt,
            'd' => VariableType::Double,
            _ => VariableType::Float,
        }
    }
}

impl Display for VariableType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum Qualifier {
    Varying,
    Uniform,
    Attribute,
    #[default]
    Local,
}

impl Qualifier {
    pub fn from_keyword(keyword: &str) -> Option<Qualifier> {
        match keyword {
            "varying" => Some(Qualifier::Varying),
            "uniform" => Some(Qualifier::Uniform),
            "attribute" => Some(Qualifier::Attribute),
            _ => None,
        }
    }
}

/// Access permission. Carried as metadata, never enforced by the parser.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default)]
pub enum Permission {
    Read,
    Write,
    #[default]
    ReadWrite,
}

/// A typed, named binding.
///
/// Vector variables own one anonymous member per component; scalar
/// variables never have members.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name: Option<String>,
    type_: VariableType,
    qualifier: Qualifier,
    permission: Permission,
    members: Option<Vec<Variable>>,
    pub value: Option<Node>,
}

impl Variable {
    /// Creates a local, read-write scalar variable.
    pub fn new(type_: VariableType, name: Option<String>) -> Self {
        Variable {
            name,
            type_,
            qualifier: Qualifier::default(),
            permission: Permission::default(),
            members: None,
            value: None,
        }
    }

    /// Creates a vector variable with `arity` anonymous members of `element`.
    pub fn vector(element: VariableType, arity: usize, name: Option<String>) -> Self {
        let members = (0..arity).map(|_| Variable::new(element, None)).collect();

        Variable {
            members: Some(members),
            ..Variable::new(VariableType::Vector, name)
        }
    }

    pub fn named(type_: VariableType, name: &str) -> Self {
        Variable::new(type_, Some(name.to_string()))
    }

    pub fn with_qualifier(mut self, qualifier: Qualifier) -> Self {
        self.qualifier = qualifier;
        self
    }

    pub fn with_permission(mut self, permission: Permission) -> Self {
        self.permission = permission;
        self
    }

    /// Wraps the variable so it can be placed in a scope and referenced by nodes.
    pub fn into_ref(self) -> VariableRef {
        Rc::new(RefCell::new(self))
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn get_type(&self) -> VariableType {
        self.type_
    }

    pub fn qualifier(&self) -> Qualifier {
        self.qualifier
    }

    pub fn permission(&self) -> Permission {
        self.permission
    }

    pub fn members(&self) -> Option<&[Variable]> {
        self.members.as_deref()
    }

    /// Number of components: the member count for vectors, 1 for scalars.
    pub fn arity(&self) -> usize {
        self.members.as_ref().map_or(1, Vec::len)
    }
}

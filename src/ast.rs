//! Tree model consumed by the complexity engine.
//!
//! The engine never sees source text; callers hand it a complete tree of
//! typed nodes. Node kinds form a closed tagged union, so construct
//! classification is a single `match` instead of open-ended dispatch.

use serde::{Deserialize, Serialize};

/// Guard or selector expression attached to a control construct.
///
/// Only `And` and `Or` are short-circuit combinations; everything else is
/// carried so realistic guards can be modeled but contributes nothing to
/// complexity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Not(Box<Expr>),
    Relational {
        op: String,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    Ident(String),
    Literal(String),
}

impl Expr {
    pub fn and(lhs: Expr, rhs: Expr) -> Self {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    pub fn or(lhs: Expr, rhs: Expr) -> Self {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }

    pub fn not(inner: Expr) -> Self {
        Expr::Not(Box::new(inner))
    }

    pub fn relational(op: impl Into<String>, lhs: Expr, rhs: Expr) -> Self {
        Expr::Relational {
            op: op.into(),
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Expr::Literal(text.into())
    }
}

/// Discriminated kind tag of a tree node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Tree root.
    Input,
    /// Container scope grouping callable units.
    PackageBody { name: Option<String> },
    /// Declaration-only section; the walker skips its subtree entirely.
    PackageSpecification,
    /// Declaration-only section; the walker skips its subtree entirely.
    TypeSpecification,
    /// Unit scope: a procedure or function body.
    ProgramUnit,
    /// Unit scope: a trigger body.
    TriggerUnit,
    /// Unit scope: a named timing-point section nested in a trigger.
    TriggerTimingPointSection,
    /// Declarator child carrying the display name of its parent unit.
    MethodDeclarator { name: String },
    If { guard: Option<Expr> },
    ElsifClause { guard: Option<Expr> },
    ElseClause,
    ForLoop { guard: Option<Expr> },
    WhileLoop { guard: Option<Expr> },
    Loop { guard: Option<Expr> },
    CaseStatement { selector: Option<Expr> },
    CaseWhenClause,
    ExceptionHandler,
    Block,
    /// Straight-line statement with no control-flow content.
    Statement,
}

impl NodeKind {
    /// Stable label used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            NodeKind::Input => "Input",
            NodeKind::PackageBody { .. } => "PackageBody",
            NodeKind::PackageSpecification => "PackageSpecification",
            NodeKind::TypeSpecification => "TypeSpecification",
            NodeKind::ProgramUnit => "ProgramUnit",
            NodeKind::TriggerUnit => "TriggerUnit",
            NodeKind::TriggerTimingPointSection => "TriggerTimingPointSection",
            NodeKind::MethodDeclarator { .. } => "MethodDeclarator",
            NodeKind::If { .. } => "If",
            NodeKind::ElsifClause { .. } => "ElsifClause",
            NodeKind::ElseClause => "ElseClause",
            NodeKind::ForLoop { .. } => "ForLoop",
            NodeKind::WhileLoop { .. } => "WhileLoop",
            NodeKind::Loop { .. } => "Loop",
            NodeKind::CaseStatement { .. } => "CaseStatement",
            NodeKind::CaseWhenClause => "CaseWhenClause",
            NodeKind::ExceptionHandler => "ExceptionHandler",
            NodeKind::Block => "Block",
            NodeKind::Statement => "Statement",
        }
    }
}

/// One node of the procedural syntax tree: a kind tag plus ordered children.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    pub fn with_children(kind: NodeKind, children: Vec<Node>) -> Self {
        Self { kind, children }
    }

    /// Name carried by the first method-declarator child, if any.
    pub fn declarator_name(&self) -> Option<&str> {
        self.children.iter().find_map(|child| match &child.kind {
            NodeKind::MethodDeclarator { name } => Some(name.as_str()),
            _ => None,
        })
    }

    /// Display name used in reports. Unresolvable names come back as the
    /// empty string; that never blocks reporting.
    pub fn display_name(&self) -> String {
        match &self.kind {
            NodeKind::PackageBody { name } => name.clone().unwrap_or_default(),
            NodeKind::ProgramUnit
            | NodeKind::TriggerUnit
            | NodeKind::TriggerTimingPointSection => {
                self.declarator_name().unwrap_or_default().to_string()
            }
            _ => String::new(),
        }
    }

    // Builders below exist for callers assembling trees by hand; parsers
    // producing `Node` values directly do not need them.

    pub fn input(children: Vec<Node>) -> Self {
        Self::with_children(NodeKind::Input, children)
    }

    pub fn package_body(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self::with_children(
            NodeKind::PackageBody {
                name: Some(name.into()),
            },
            children,
        )
    }

    pub fn program_unit(name: impl Into<String>, body: Vec<Node>) -> Self {
        Self::with_children(NodeKind::ProgramUnit, Self::declared_body(name, body))
    }

    pub fn trigger_unit(name: impl Into<String>, body: Vec<Node>) -> Self {
        Self::with_children(NodeKind::TriggerUnit, Self::declared_body(name, body))
    }

    pub fn timing_point_section(name: impl Into<String>, body: Vec<Node>) -> Self {
        Self::with_children(
            NodeKind::TriggerTimingPointSection,
            Self::declared_body(name, body),
        )
    }

    fn declared_body(name: impl Into<String>, mut body: Vec<Node>) -> Vec<Node> {
        let mut children = vec![Node::new(NodeKind::MethodDeclarator { name: name.into() })];
        children.append(&mut body);
        children
    }

    pub fn if_stmt(guard: impl Into<Option<Expr>>, body: Vec<Node>) -> Self {
        Self::with_children(
            NodeKind::If {
                guard: guard.into(),
            },
            body,
        )
    }

    pub fn elsif_clause(guard: impl Into<Option<Expr>>, body: Vec<Node>) -> Self {
        Self::with_children(
            NodeKind::ElsifClause {
                guard: guard.into(),
            },
            body,
        )
    }

    pub fn else_clause(body: Vec<Node>) -> Self {
        Self::with_children(NodeKind::ElseClause, body)
    }

    pub fn for_loop(guard: impl Into<Option<Expr>>, body: Vec<Node>) -> Self {
        Self::with_children(
            NodeKind::ForLoop {
                guard: guard.into(),
            },
            body,
        )
    }

    pub fn while_loop(guard: impl Into<Option<Expr>>, body: Vec<Node>) -> Self {
        Self::with_children(
            NodeKind::WhileLoop {
                guard: guard.into(),
            },
            body,
        )
    }

    pub fn basic_loop(guard: impl Into<Option<Expr>>, body: Vec<Node>) -> Self {
        Self::with_children(
            NodeKind::Loop {
                guard: guard.into(),
            },
            body,
        )
    }

    pub fn case_stmt(selector: impl Into<Option<Expr>>, arms: Vec<Node>) -> Self {
        Self::with_children(
            NodeKind::CaseStatement {
                selector: selector.into(),
            },
            arms,
        )
    }

    pub fn case_when(body: Vec<Node>) -> Self {
        Self::with_children(NodeKind::CaseWhenClause, body)
    }

    pub fn exception_handler(body: Vec<Node>) -> Self {
        Self::with_children(NodeKind::ExceptionHandler, body)
    }

    pub fn block(children: Vec<Node>) -> Self {
        Self::with_children(NodeKind::Block, children)
    }

    pub fn statement() -> Self {
        Self::new(NodeKind::Statement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declarator_name_found() {
        let unit = Node::program_unit("update_salary", vec![Node::statement()]);
        assert_eq!(unit.declarator_name(), Some("update_salary"));
        assert_eq!(unit.display_name(), "update_salary");
    }

    #[test]
    fn test_display_name_unresolvable_is_empty() {
        let unit = Node::with_children(NodeKind::ProgramUnit, vec![Node::statement()]);
        assert_eq!(unit.declarator_name(), None);
        assert_eq!(unit.display_name(), "");
    }

    #[test]
    fn test_display_name_package_body() {
        let body = Node::package_body("billing_pkg", vec![]);
        assert_eq!(body.display_name(), "billing_pkg");

        let anonymous = Node::new(NodeKind::PackageBody { name: None });
        assert_eq!(anonymous.display_name(), "");
    }

    #[test]
    fn test_display_name_non_scope_nodes_empty() {
        assert_eq!(Node::statement().display_name(), "");
        assert_eq!(Node::if_stmt(None, vec![]).display_name(), "");
    }

    #[test]
    fn test_expr_builders_nest() {
        let guard = Expr::or(
            Expr::and(
                Expr::relational(">", Expr::ident("x"), Expr::literal("0")),
                Expr::relational("<", Expr::ident("y"), Expr::literal("5")),
            ),
            Expr::relational("=", Expr::ident("z"), Expr::literal("1")),
        );
        assert!(matches!(guard, Expr::Or(_, _)));
    }
}

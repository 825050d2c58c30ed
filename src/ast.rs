//! Syntax tree consumed by the converter.
//!
//! The tree arrives fully parsed and semantically resolved: expression nodes
//! that drive type-directed decisions carry a [`ResolvedEntity`] attached by
//! the upstream resolver. The converter reads the tree, it never mutates it.

use serde::Serialize;
use std::fmt;

/// Source position, carried for diagnostics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub line: u32,
    pub column: u32,
}

impl Span {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    pub fn dummy() -> Self {
        Self { line: 0, column: 0 }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.line, self.column)
    }
}

/// Type information resolved upstream for an external (CLR) type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEntity {
    pub full_name: String,
    pub namespace: String,
    pub name: String,
}

impl TypeEntity {
    /// Build an entity from a dotted CLR full name such as `System.Int32`.
    pub fn external(full_name: &str) -> Self {
        let (namespace, name) = match full_name.rsplit_once('.') {
            Some((namespace, name)) => (namespace.to_string(), name.to_string()),
            None => (String::new(), full_name.to_string()),
        };
        Self {
            full_name: full_name.to_string(),
            namespace,
            name,
        }
    }

    pub fn is_boolean(&self) -> bool {
        self.full_name == "System.Boolean"
    }

    /// C# default value literal for the type, used when coercing a
    /// non-boolean condition into a comparison.
    pub fn default_value(&self) -> &'static str {
        match self.full_name.as_str() {
            "System.Int32" | "System.Int64" => "0",
            "System.Single" | "System.Double" => "0.0f",
            "System.Boolean" => "false",
            _ => "null",
        }
    }
}

/// Resolver attachment on an expression node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedEntity {
    Type(TypeEntity),
    /// Compiler intrinsic with no C# surface form; calls to it are dropped.
    BuiltinFunction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub visibility: Visibility,
    pub is_abstract: bool,
    pub is_virtual: bool,
    pub is_override: bool,
    pub is_static: bool,
    pub is_final: bool,
}

/// One compilation unit, the granularity of conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    pub path: String,
    pub namespace: Option<NamespaceDeclaration>,
    pub imports: Vec<Import>,
    pub types: Vec<TypeDefinition>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceDeclaration {
    pub name: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Import {
    pub namespace: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeDefinition {
    Class(ClassDefinition),
    Enum(EnumDefinition),
    Struct(StructDefinition),
    Interface(InterfaceDefinition),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDefinition {
    pub modifiers: Modifiers,
    pub name: String,
    pub generic_parameters: Vec<GenericParameter>,
    pub base_types: Vec<TypeReference>,
    pub members: Vec<Member>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StructDefinition {
    pub modifiers: Modifiers,
    pub name: String,
    pub members: Vec<Member>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDefinition {
    pub modifiers: Modifiers,
    pub name: String,
    pub members: Vec<Member>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDefinition {
    pub modifiers: Modifiers,
    pub name: String,
    pub members: Vec<EnumMember>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    pub name: String,
    pub initializer: Option<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Field(Field),
    Method(Method),
    Property(Property),
    Event(Event),
    Constructor(Method),
    Destructor(Method),
    ExplicitInterfaceMember {
        interface: TypeReference,
        method: Method,
        span: Span,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub modifiers: Modifiers,
    pub ty: TypeReference,
    pub name: String,
    pub initializer: Option<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub modifiers: Modifiers,
    pub ty: TypeReference,
    pub name: String,
    pub getter: Option<Method>,
    pub setter: Option<Method>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub modifiers: Modifiers,
    pub ty: TypeReference,
    pub name: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Method {
    pub modifiers: Modifiers,
    pub name: String,
    pub generic_parameters: Vec<GenericParameter>,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<TypeReference>,
    pub locals: Vec<Local>,
    pub body: Block,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenericParameter {
    pub name: String,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub ty: TypeReference,
    pub name: String,
    pub span: Span,
}

/// A variable declared somewhere inside a method.
///
/// Upstream desugaring lifts declarations out of the statement stream into
/// the method's local list; the source-written declaration is kept
/// here so hoisting can re-emit it. Synthetic locals have no source-level
/// declaration and are never re-emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Local {
    pub name: String,
    pub synthetic: bool,
    pub declaration: Option<DeclarationStatement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub name: String,
    pub ty: Option<TypeReference>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeclarationStatement {
    pub declaration: Declaration,
    pub initializer: Option<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExceptionHandler {
    pub declaration: Option<Declaration>,
    pub block: Block,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Block(Block),
    If {
        condition: Expression,
        then_block: Block,
        else_block: Option<Block>,
        span: Span,
    },
    /// UnityScript `for (x in collection)`; lowers to C# `foreach`.
    For {
        declaration: Declaration,
        iterator: Expression,
        block: Block,
        span: Span,
    },
    While {
        condition: Expression,
        block: Block,
        span: Span,
    },
    Return {
        value: Option<Expression>,
        span: Span,
    },
    Continue {
        span: Span,
    },
    Expression {
        expression: Expression,
        span: Span,
    },
    Declaration(DeclarationStatement),
    // Everything below is outside the translated subset.
    Break {
        span: Span,
    },
    Yield {
        value: Option<Expression>,
        span: Span,
    },
    Unless {
        condition: Expression,
        block: Block,
        span: Span,
    },
    Try {
        protected: Block,
        handlers: Vec<ExceptionHandler>,
        ensure: Option<Block>,
        span: Span,
    },
    Raise {
        exception: Option<Expression>,
        span: Span,
    },
    Goto {
        label: String,
        span: Span,
    },
    Label {
        name: String,
        span: Span,
    },
    Macro {
        name: String,
        arguments: Vec<Expression>,
        body: Block,
        span: Span,
    },
    Unpack {
        declarations: Vec<Declaration>,
        expression: Expression,
        span: Span,
    },
    Custom {
        span: Span,
    },
    TypeMember {
        definition: Box<TypeDefinition>,
        span: Span,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Addition,
    Subtraction,
    Multiply,
    Division,
    Modulus,
    Assign,
    InPlaceAddition,
    InPlaceSubtraction,
    InPlaceMultiply,
    InPlaceDivision,
    Equality,
    Inequality,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    And,
    Or,
    BitwiseAnd,
    BitwiseOr,
    ExclusiveOr,
    ShiftLeft,
    ShiftRight,
}

impl BinaryOperator {
    /// Source-level spelling; logical operators keep their UnityScript
    /// keywords here and are remapped during emission.
    pub fn source_symbol(self) -> &'static str {
        match self {
            BinaryOperator::Addition => "+",
            BinaryOperator::Subtraction => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Division => "/",
            BinaryOperator::Modulus => "%",
            BinaryOperator::Assign => "=",
            BinaryOperator::InPlaceAddition => "+=",
            BinaryOperator::InPlaceSubtraction => "-=",
            BinaryOperator::InPlaceMultiply => "*=",
            BinaryOperator::InPlaceDivision => "/=",
            BinaryOperator::Equality => "==",
            BinaryOperator::Inequality => "!=",
            BinaryOperator::LessThan => "<",
            BinaryOperator::LessThanOrEqual => "<=",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::GreaterThanOrEqual => ">=",
            BinaryOperator::And => "and",
            BinaryOperator::Or => "or",
            BinaryOperator::BitwiseAnd => "&",
            BinaryOperator::BitwiseOr => "|",
            BinaryOperator::ExclusiveOr => "^",
            BinaryOperator::ShiftLeft => "<<",
            BinaryOperator::ShiftRight => ">>",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    UnaryNegation,
    LogicalNot,
    OnesComplement,
    Increment,
    Decrement,
    PostIncrement,
    PostDecrement,
}

impl UnaryOperator {
    pub fn source_symbol(self) -> &'static str {
        match self {
            UnaryOperator::UnaryNegation => "-",
            UnaryOperator::LogicalNot => "not",
            UnaryOperator::OnesComplement => "~",
            UnaryOperator::Increment | UnaryOperator::PostIncrement => "++",
            UnaryOperator::Decrement | UnaryOperator::PostDecrement => "--",
        }
    }

    pub fn is_postfix(self) -> bool {
        matches!(
            self,
            UnaryOperator::PostIncrement | UnaryOperator::PostDecrement
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Binary {
        operator: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
        /// Compiler-introduced binary expressions emit nothing.
        synthetic: bool,
        entity: Option<ResolvedEntity>,
        span: Span,
    },
    Unary {
        operator: UnaryOperator,
        operand: Box<Expression>,
        entity: Option<ResolvedEntity>,
        span: Span,
    },
    Literal {
        value: Literal,
        entity: Option<ResolvedEntity>,
        span: Span,
    },
    SelfReference {
        entity: Option<ResolvedEntity>,
        span: Span,
    },
    Reference {
        name: String,
        entity: Option<ResolvedEntity>,
        span: Span,
    },
    MemberReference {
        target: Box<Expression>,
        name: String,
        entity: Option<ResolvedEntity>,
        span: Span,
    },
    MethodInvocation {
        target: Box<Expression>,
        arguments: Vec<Expression>,
        entity: Option<ResolvedEntity>,
        span: Span,
    },
    GenericReference {
        target: Box<Expression>,
        arguments: Vec<TypeReference>,
        entity: Option<ResolvedEntity>,
        span: Span,
    },
    Slicing {
        target: Box<Expression>,
        indices: Vec<Expression>,
        entity: Option<ResolvedEntity>,
        span: Span,
    },
    // Everything below is outside the translated subset.
    Conditional {
        condition: Box<Expression>,
        when_true: Box<Expression>,
        when_false: Box<Expression>,
        span: Span,
    },
    Cast {
        ty: TypeReference,
        operand: Box<Expression>,
        span: Span,
    },
    TryCast {
        ty: TypeReference,
        operand: Box<Expression>,
        span: Span,
    },
    TypeOf {
        ty: TypeReference,
        span: Span,
    },
    Interpolation {
        parts: Vec<Expression>,
        span: Span,
    },
    Quasiquote {
        span: Span,
    },
    Splice {
        expression: Box<Expression>,
        span: Span,
    },
    ListLiteral {
        items: Vec<Expression>,
        span: Span,
    },
    HashLiteral {
        pairs: Vec<(Expression, Expression)>,
        span: Span,
    },
    ArrayLiteral {
        items: Vec<Expression>,
        span: Span,
    },
    Generator {
        expression: Box<Expression>,
        iterator: Box<Expression>,
        span: Span,
    },
    BlockExpression {
        parameters: Vec<Parameter>,
        body: Block,
        span: Span,
    },
    RegexLiteral {
        pattern: String,
        span: Span,
    },
    CharLiteral {
        value: char,
        span: Span,
    },
    TimeSpanLiteral {
        value: String,
        span: Span,
    },
    Custom {
        span: Span,
    },
}

impl Expression {
    /// Resolver attachment, when the node kind can carry one.
    pub fn entity(&self) -> Option<&ResolvedEntity> {
        match self {
            Expression::Binary { entity, .. }
            | Expression::Unary { entity, .. }
            | Expression::Literal { entity, .. }
            | Expression::SelfReference { entity, .. }
            | Expression::Reference { entity, .. }
            | Expression::MemberReference { entity, .. }
            | Expression::MethodInvocation { entity, .. }
            | Expression::GenericReference { entity, .. }
            | Expression::Slicing { entity, .. } => entity.as_ref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeReference {
    Simple {
        name: String,
        entity: Option<TypeEntity>,
        span: Span,
    },
    Array {
        element: Box<TypeReference>,
        rank: u32,
        span: Span,
    },
    Generic {
        name: String,
        arguments: Vec<TypeReference>,
        span: Span,
    },
    Callable {
        parameters: Vec<TypeReference>,
        return_type: Option<Box<TypeReference>>,
        span: Span,
    },
}

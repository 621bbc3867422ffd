use std::convert::Infallible;

use crate::ast::{Block, Expr, Identifier, Program, Statement};

/// Bottom-up rewriting of a syntax tree.
///
/// Every child slot of a node is rewritten first, then the transform is
/// applied to each expression node itself and its result takes the node's
/// place. Statements, blocks and programs are rebuilt from their rewritten
/// children. Leaves are handed to the transform unchanged.
///
/// The traversal matches every variant without a wildcard arm, so adding a
/// node type fails to compile until it is handled here.
///
/// # Example
/// ```
/// use monkey::{
///     ast::{Expr, Modify},
///     interpreter::parser::parse,
/// };
///
/// let (program, errors) = parse("[1, 2 + 1, fn(x) { 1 }]");
/// assert!(errors.is_empty());
///
/// let turned = program.modify(|expr| match expr {
///                                 Expr::IntegerLiteral { value: 1, .. } => Expr::integer(2),
///                                 other => other,
///                             });
///
/// assert_eq!(turned.to_string(), "[2, (2 + 2), fn(x) { 2 }]");
/// ```
pub trait Modify: Sized {
    /// Rewrites the tree with a fallible transform, stopping at the first
    /// error it returns.
    fn try_modify<E, F>(self, modifier: &mut F) -> Result<Self, E>
        where F: FnMut(Expr) -> Result<Expr, E>;

    /// Rewrites the tree with an infallible transform.
    #[must_use]
    fn modify<F>(self, mut modifier: F) -> Self
        where F: FnMut(Expr) -> Expr
    {
        let result = self.try_modify(&mut |expr| Ok::<_, Infallible>(modifier(expr)));
        match result {
            Ok(node) => node,
            Err(never) => match never {},
        }
    }
}

impl Modify for Program {
    fn try_modify<E, F>(self, modifier: &mut F) -> Result<Self, E>
        where F: FnMut(Expr) -> Result<Expr, E>
    {
        Ok(Self { statements: modify_statements(self.statements, modifier)?, })
    }
}

impl Modify for Block {
    fn try_modify<E, F>(self, modifier: &mut F) -> Result<Self, E>
        where F: FnMut(Expr) -> Result<Expr, E>
    {
        Ok(Self { statements: modify_statements(self.statements, modifier)?, })
    }
}

impl Modify for Statement {
    fn try_modify<E, F>(self, modifier: &mut F) -> Result<Self, E>
        where F: FnMut(Expr) -> Result<Expr, E>
    {
        Ok(match self {
               Self::Let { name, value } => Self::Let { name,
                                                        value: value.try_modify(modifier)? },
               Self::Return { value } => Self::Return { value: value.try_modify(modifier)?, },
               Self::Expression { expr } => Self::Expression { expr: expr.try_modify(modifier)?, },
           })
    }
}

impl Modify for Expr {
    fn try_modify<E, F>(self, modifier: &mut F) -> Result<Self, E>
        where F: FnMut(Expr) -> Result<Expr, E>
    {
        let node = match self {
            leaf @ (Self::Identifier(_)
            | Self::IntegerLiteral { .. }
            | Self::FloatLiteral { .. }
            | Self::Boolean(_)
            | Self::StringLiteral(_)
            | Self::Missing) => leaf,
            Self::ArrayLiteral(elements) => {
                Self::ArrayLiteral(modify_expressions(elements, modifier)?)
            },
            Self::HashLiteral(pairs) => {
                let pairs = pairs.into_iter()
                                 .map(|(key, value)| {
                                     Ok((key.try_modify(modifier)?, value.try_modify(modifier)?))
                                 })
                                 .collect::<Result<_, E>>()?;
                Self::HashLiteral(pairs)
            },
            Self::Prefix { operator, right } => Self::Prefix { operator,
                                                               right: modify_boxed(right,
                                                                                   modifier)? },
            Self::Infix { left,
                          operator,
                          right, } => Self::Infix { left: modify_boxed(left, modifier)?,
                                                    operator,
                                                    right: modify_boxed(right, modifier)? },
            Self::If { condition,
                       consequence,
                       alternative, } => {
                Self::If { condition:   modify_boxed(condition, modifier)?,
                           consequence: consequence.try_modify(modifier)?,
                           alternative: alternative.map(|alt| alt.try_modify(modifier))
                                                   .transpose()?, }
            },
            Self::FunctionLiteral { parameters, body } => {
                Self::FunctionLiteral { parameters: modify_parameters(parameters, modifier)?,
                                        body:       body.try_modify(modifier)?, }
            },
            Self::MacroLiteral { parameters, body } => {
                Self::MacroLiteral { parameters: modify_parameters(parameters, modifier)?,
                                     body:       body.try_modify(modifier)?, }
            },
            Self::Call { function, arguments } => {
                Self::Call { function:  modify_boxed(function, modifier)?,
                             arguments: modify_expressions(arguments, modifier)?, }
            },
            Self::Index { left, index } => Self::Index { left:  modify_boxed(left, modifier)?,
                                                         index: modify_boxed(index, modifier)?, },
        };

        modifier(node)
    }
}

fn modify_statements<E, F>(statements: Vec<Statement>, modifier: &mut F) -> Result<Vec<Statement>, E>
    where F: FnMut(Expr) -> Result<Expr, E>
{
    statements.into_iter()
              .map(|statement| statement.try_modify(modifier))
              .collect()
}

fn modify_expressions<E, F>(expressions: Vec<Expr>, modifier: &mut F) -> Result<Vec<Expr>, E>
    where F: FnMut(Expr) -> Result<Expr, E>
{
    expressions.into_iter()
               .map(|expr| expr.try_modify(modifier))
               .collect()
}

fn modify_boxed<E, F>(expr: Box<Expr>, modifier: &mut F) -> Result<Box<Expr>, E>
    where F: FnMut(Expr) -> Result<Expr, E>
{
    Ok(Box::new((*expr).try_modify(modifier)?))
}

/// Parameters go through the transform as identifier expressions. A
/// replacement that is not an identifier leaves the parameter as it was.
fn modify_parameters<E, F>(parameters: Vec<Identifier>,
                           modifier: &mut F)
                           -> Result<Vec<Identifier>, E>
    where F: FnMut(Expr) -> Result<Expr, E>
{
    parameters.into_iter()
              .map(|param| {
                  Ok(match modifier(Expr::Identifier(param.clone()))? {
                         Expr::Identifier(renamed) => renamed,
                         _ => param,
                     })
              })
              .collect()
}

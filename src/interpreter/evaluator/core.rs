use std::rc::Rc;

use crate::{
    ast::{Block, Expr, Identifier, Program, Statement},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            function::{apply_function, lookup_builtin},
            quote::quote,
        },
        object::{Environment, Function, Macro, Object},
    },
};

/// Result type used by the evaluator.
///
/// `Err` carries an evaluation error up to the nearest `evaluate` call, where
/// it becomes an `Error` object.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Why evaluation of a node stopped before producing a value.
///
/// Both variants travel through `?` from the node that raised them to the
/// nearest boundary: a function call, a macro application or the program.
#[derive(Debug, Clone, PartialEq)]
pub enum Unwind {
    /// A `return` statement, carrying its value to the nearest function call.
    Return(Object),
    /// An evaluation error. Function calls pass it on unchanged.
    Error(RuntimeError),
}

impl Unwind {
    /// Ends the unwinding at a call or program boundary: a `return` yields
    /// its value and an error keeps propagating.
    pub fn into_result(self) -> EvalResult<Object> {
        match self {
            Self::Return(value) => Ok(value),
            Self::Error(error) => Err(error),
        }
    }
}

impl From<RuntimeError> for Unwind {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

/// Result type of the tree walk: a value, or the reason it stopped early.
pub type Flow<T> = Result<T, Unwind>;

/// Evaluates a program in the given environment.
///
/// This is the entry point for evaluation. A `return` at the top level ends
/// the program with the returned value, and the first error ends it with an
/// `Error` object carrying the message.
///
/// # Parameters
/// - `program`: A program without parse errors, after macro expansion.
/// - `env`: The global scope. Bindings made by the program stay in it.
///
/// # Returns
/// The value of the last statement, or `Nil` for an empty program.
///
/// # Example
/// ```
/// use monkey::interpreter::{
///     evaluator::evaluate,
///     object::{Environment, Object},
///     parser::parse,
/// };
///
/// let env = Environment::new();
///
/// let (program, _) = parse("let double = fn(x) { x * 2 }; double(21)");
/// assert_eq!(evaluate(&program, &env), Object::Integer(42));
///
/// let (program, _) = parse("5 + true; 10");
/// assert_eq!(evaluate(&program, &env).to_string(),
///            "ERROR: type mismatch: Integer + Boolean");
/// ```
#[must_use]
pub fn evaluate(program: &Program, env: &Environment) -> Object {
    eval_program(program, env).unwrap_or_else(|error| Object::Error(error.to_string()))
}

/// Evaluates the statements of a program in order. A top-level `return` ends
/// the program with its value.
pub fn eval_program(program: &Program, env: &Environment) -> EvalResult<Object> {
    let mut result = Object::Nil;

    for statement in &program.statements {
        match eval_statement(statement, env) {
            Ok(value) => result = value,
            Err(unwind) => return unwind.into_result(),
        }
    }

    Ok(result)
}

/// Evaluates the statements of a block in order.
///
/// A `return` stops the block and keeps unwinding through enclosing blocks
/// and expressions until a function call catches it.
pub fn eval_block(block: &Block, env: &Environment) -> Flow<Object> {
    let mut result = Object::Nil;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;
    }

    Ok(result)
}

/// Evaluates one statement. `let` binds in `env` and yields the bound value.
pub fn eval_statement(statement: &Statement, env: &Environment) -> Flow<Object> {
    match statement {
        Statement::Let { name, value } => {
            let value = eval_expression(value, env)?;
            Ok(env.set(name.name.as_str(), value))
        },
        Statement::Return { value } => {
            let value = eval_expression(value, env)?;
            Err(Unwind::Return(value))
        },
        Statement::Expression { expr } => eval_expression(expr, env),
    }
}

/// Evaluates an expression.
///
/// Operands and arguments are evaluated left to right. The first error or
/// `return` stops evaluation of the enclosing construct.
pub fn eval_expression(expr: &Expr, env: &Environment) -> Flow<Object> {
    match expr {
        Expr::Identifier(ident) => eval_identifier(ident, env),
        Expr::IntegerLiteral { value, .. } => Ok(Object::Integer(*value)),
        Expr::FloatLiteral { value, .. } => Ok(Object::Float(*value)),
        Expr::Boolean(value) => Ok(Object::Boolean(*value)),
        Expr::StringLiteral(value) => Ok(Object::from(value.as_str())),
        Expr::ArrayLiteral(elements) => Ok(Object::from(eval_expressions(elements, env)?)),
        Expr::HashLiteral(pairs) => super::index::eval_hash_literal(pairs, env),
        Expr::Prefix { operator, right } => {
            let right = eval_expression(right, env)?;
            Ok(super::unary::eval_prefix(*operator, &right)?)
        },
        Expr::Infix { left,
                      operator,
                      right, } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;
            Ok(super::binary::eval_infix(*operator, &left, &right)?)
        },
        Expr::If { condition,
                   consequence,
                   alternative, } => {
            if eval_expression(condition, env)?.is_truthy() {
                eval_block(consequence, env)
            } else if let Some(alternative) = alternative {
                eval_block(alternative, env)
            } else {
                Ok(Object::Nil)
            }
        },
        Expr::FunctionLiteral { parameters, body } => {
            Ok(Object::Function(Rc::new(Function { parameters: parameters.clone(),
                                                   body:       body.clone(),
                                                   env:        env.clone(), })))
        },
        Expr::MacroLiteral { parameters, body } => {
            Ok(Object::Macro(Rc::new(Macro { parameters: parameters.clone(),
                                             body:       body.clone(),
                                             env:        env.clone(), })))
        },
        Expr::Call { function, arguments } => {
            if let Expr::Identifier(ident) = function.as_ref()
               && ident.name == "quote"
            {
                return quote(arguments, env);
            }

            let function = eval_expression(function, env)?;
            let arguments = eval_expressions(arguments, env)?;
            Ok(apply_function(&function, arguments)?)
        },
        Expr::Index { left, index } => {
            let left = eval_expression(left, env)?;
            let index = eval_expression(index, env)?;
            Ok(super::index::eval_index(&left, &index)?)
        },
        Expr::Missing => Err(RuntimeError::MissingExpression.into()),
    }
}

/// Evaluates expressions left to right, stopping at the first error or
/// `return`.
pub fn eval_expressions(expressions: &[Expr], env: &Environment) -> Flow<Vec<Object>> {
    expressions.iter()
               .map(|expr| eval_expression(expr, env))
               .collect()
}

/// Resolves a name through the scope chain, then the builtin table.
fn eval_identifier(ident: &Identifier, env: &Environment) -> Flow<Object> {
    if let Some(value) = env.get(&ident.name) {
        return Ok(value);
    }

    lookup_builtin(&ident.name).map(Object::Builtin).ok_or_else(|| {
        RuntimeError::IdentifierNotFound { name: ident.name.clone(), }.into()
    })
}

use std::rc::Rc;

use crate::{
    ast::{Expr, Modify, Program, Statement},
    error::MacroError,
    interpreter::{
        evaluator::core::{Unwind, eval_block},
        object::{Environment, Macro, Object},
    },
};

/// Registers the top-level macro definitions of a program and removes them.
///
/// Every top-level `let <name> = macro(...) { ... };` binds a `Macro` object
/// in `env` and is deleted from the program, so no macro definition reaches
/// the evaluator. Definitions nested inside other constructs are left alone.
///
/// # Example
/// ```
/// use monkey::interpreter::{
///     macro_expander::define_macros,
///     object::{Environment, Object},
///     parser::parse,
/// };
///
/// let (mut program, _) = parse("let number = 1; let mymacro = macro(x, y) { x + y; };");
/// let env = Environment::new();
///
/// define_macros(&mut program, &env);
///
/// assert_eq!(program.statements.len(), 1);
/// assert!(env.get("number").is_none());
/// assert!(matches!(env.get("mymacro"), Some(Object::Macro(_))));
/// ```
pub fn define_macros(program: &mut Program, env: &Environment) {
    let mut definitions = Vec::new();

    for (index, statement) in program.statements.iter().enumerate() {
        if let Statement::Let { name,
                                value: Expr::MacroLiteral { parameters, body }, } = statement
        {
            let mac = Macro { parameters: parameters.clone(),
                              body:       body.clone(),
                              env:        env.clone(), };
            env.set(name.name.as_str(), Object::Macro(Rc::new(mac)));
            definitions.push(index);
        }
    }

    for index in definitions.into_iter().rev() {
        program.statements.remove(index);
    }
}

/// Replaces every call of a registered macro with the syntax it produces.
///
/// Arguments are passed to the macro unevaluated, each wrapped in a `Quote`.
/// The body runs in a scope enclosing the macro's defining scope and must
/// evaluate to a `Quote`, whose tree takes the place of the call.
///
/// # Errors
/// Any `MacroError`; expansion stops at the first one.
///
/// # Example
/// ```
/// use monkey::interpreter::{
///     macro_expander::{define_macros, expand_macros},
///     object::Environment,
///     parser::parse,
/// };
///
/// let source = "let reverse = macro(a, b) { quote(unquote(b) - unquote(a)); };
///               reverse(2 + 2, 10 - 5);";
/// let (mut program, _) = parse(source);
/// let env = Environment::new();
///
/// define_macros(&mut program, &env);
/// let expanded = expand_macros(program, &env).unwrap();
///
/// assert_eq!(expanded.to_string(), "((10 - 5) - (2 + 2))");
/// ```
pub fn expand_macros(program: Program, env: &Environment) -> Result<Program, MacroError> {
    program.try_modify(&mut |node| -> Result<Expr, MacroError> {
               match node {
                   Expr::Call { function, arguments } => match macro_named(&function, env) {
                       Some((name, mac)) => expand_call(name, &mac, arguments),
                       None => Ok(Expr::Call { function, arguments }),
                   },
                   other => Ok(other),
               }
           })
}

/// The macro bound to a callee identifier, if there is one.
fn macro_named(function: &Expr, env: &Environment) -> Option<(String, Rc<Macro>)> {
    let Expr::Identifier(ident) = function else {
        return None;
    };

    match env.get(&ident.name) {
        Some(Object::Macro(mac)) => Some((ident.name.clone(), mac)),
        _ => None,
    }
}

fn expand_call(name: String, mac: &Macro, arguments: Vec<Expr>) -> Result<Expr, MacroError> {
    if arguments.len() != mac.parameters.len() {
        return Err(MacroError::WrongArgumentCount { name,
                                                    expected: mac.parameters.len(),
                                                    got: arguments.len() });
    }

    let env = Environment::new_enclosed(&mac.env);
    for (param, argument) in mac.parameters.iter().zip(arguments) {
        env.set(param.name.as_str(), Object::from(argument));
    }

    let result = match eval_block(&mac.body, &env).or_else(Unwind::into_result) {
        Ok(value) => value,
        Err(error) => return Err(MacroError::Failed { name, error }),
    };

    match result {
        Object::Quote(node) => Ok(Rc::unwrap_or_clone(node)),
        other => Err(MacroError::NotQuote { name,
                                            kind: other.kind() }),
    }
}

/*
*                    katc -- kat compiler.
*
* program     = "start" "{" { statement } "close" "}" ;
* statement   = vardecl | output | input | if | while | expression ";" ;
* vardecl     = storage ident [ "=" expression ] ";" ;
* storage     = "intbox" | "floatbox" | "stringbox" | "charbox" | "boolbox" ;
* output      = "out" "<<" expression ";" ;
* input       = "in" ">>" ident ";" ;
* if          = "if" "(" expression ")" "{" { statement } "}"
*               [ "else" "{" { statement } "}" ] ;
* while       = "while" "(" expression ")" "{" { statement } "}" ;
* expression  = operand { operator operand } ;
* operand     = ident | integer | float | string | char | "true" | "false" | "endl" ;
*
* Expressions are a flat operand/operator chain with no precedence levels.
*/

mod declarations;
mod expressions;
mod program;
mod statements;
mod traits;

pub use declarations::{StorageKind, VarDecl};
pub use expressions::Expression;
pub use program::Program;
pub use statements::{IfStmt, InputStmt, OutputStmt, Statement, StatementKind, WhileStmt};
pub use traits::AstVisitor;

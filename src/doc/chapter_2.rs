/*!
# Statements
*/

#[path = "statements/assign.rs"]
#[allow(non_snake_case)]
pub mod ASSIGN;

#[path = "statements/call.rs"]
#[allow(non_snake_case)]
pub mod CALL;

#[path = "statements/end.rs"]
#[allow(non_snake_case)]
pub mod END;

#[path = "statements/for.rs"]
#[allow(non_snake_case)]
pub mod FOR;

#[path = "statements/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "statements/input.rs"]
#[allow(non_snake_case)]
pub mod INPUT;

#[path = "statements/print.rs"]
#[allow(non_snake_case)]
pub mod PRINT;

#[path = "statements/program.rs"]
#[allow(non_snake_case)]
pub mod PROGRAM;

#[path = "statements/return.rs"]
#[allow(non_snake_case)]
pub mod RETURN;

#[path = "statements/sub.rs"]
#[allow(non_snake_case)]
pub mod SUB;

#[path = "statements/while.rs"]
#[allow(non_snake_case)]
pub mod WHILE;

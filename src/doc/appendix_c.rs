/*!
# Limits and Internals

tiny never builds a syntax tree. The source is scanned once into a flat
list of tokens and the interpreter walks that list with a single program
counter, evaluating expressions as it reads them.

Control flow is nothing more than moving the program counter. A false
`IF` steps over tokens until it sees `ELSE` or `ENDIF`. A `WHILE`
remembers where its condition starts and jumps back there each time it
reaches `ENDWHILE`. A `FOR` remembers where its body starts. `CALL`
pushes the position after itself on a stack and jumps to the body of the
subroutine; `RETURN` pops it.

Because a false `IF` looks for the first `ELSE` or `ENDIF` it finds, an
`IF` nested inside the false branch of another `IF` ends the skip early.
Keep nested conditionals in the true branch, or move them into a `SUB`.

Only one subroutine entry is remembered: the most recently defined `SUB`.
`CALL` always runs that one, whatever name follows it.

*/

/*!
# `END`

## Purpose
Marks the end of the program.

## Remarks
Execution stops when it reaches `END`. A block still open at `END` is an
`UNTERMINATED BLOCK` error.

*/

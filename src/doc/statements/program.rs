/*!
# `PROGRAM <name> :`

## Purpose
Begins every program.

## Remarks
Only blank lines and comments may come before it.

*/

/*!
# `SUB <name> : ... ENDSUB`

## Purpose
Define a subroutine.

## Remarks
The body is skipped where it is defined and runs only through `CALL`.
Defining another `SUB` replaces the one `CALL` will run.

*/

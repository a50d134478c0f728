/*!
# Errors

Every error stops the program. The message names the error, the source
line, and the token position where execution stopped, followed by
details when there are any.

| Error                 | Cause                                                        |
|-----------------------|--------------------------------------------------------------|
| `SYNTAX ERROR`        | A token other than the one required, or an unknown character |
| `RETURN WITHOUT CALL` | `RETURN` with no `CALL` in progress                          |
| `OVERFLOW`            | A number literal larger than 2147483647                      |
| `OUT OF MEMORY`       | More than 256 calls in progress                              |
| `DIVISION BY ZERO`    | `/` or `%` with a zero right side                            |
| `UNKNOWN SYMBOL`      | Reading a variable never assigned, or `CALL` with no `SUB`   |
| `UNEXPECTED TOKEN`    | A word that cannot start a statement here                    |
| `UNTERMINATED BLOCK`  | The program ends inside an `IF`, `WHILE`, `FOR`, or `SUB`    |
| `INPUT ERROR`         | `INPUT` received something other than an integer             |
| `INPUT PAST END`      | `INPUT` with nothing left to read                            |
| `FILE NOT FOUND`      | The program file does not exist                              |

The words `THEN`, `DO`, `AND`, `OR`, `NOT`, and `VAR` are reserved. They
are recognized but no statement uses them, so writing one where a
statement belongs is an `UNEXPECTED TOKEN` error.

*/

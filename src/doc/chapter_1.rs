/*!
# Expressions

Every value is a signed 32-bit integer. Arithmetic that goes past the
limits wraps around. A literal too big to fit is an `OVERFLOW` error.

Variable names start with a letter followed by letters, digits, or `_`.
Names are case sensitive; keywords are not. Reading a variable that has
never been assigned is an `UNKNOWN SYMBOL` error.

## Operators

From lowest to highest precedence:

| Operators                      | Meaning                          |
|--------------------------------|----------------------------------|
| `=` `<>` `<` `<=` `>` `>=`     | Comparison, yields 1 or 0        |
| `+` `-`                        | Addition, subtraction            |
| `*` `/` `%`                    | Multiplication, division, modulo |
| `-`                            | Negation                         |
| `( )`                          | Grouping                         |

Division and modulo truncate toward zero. Dividing by zero, or taking a
modulo by zero, is a `DIVISION BY ZERO` error.

Only one comparison is allowed in a condition. `a < b < c` compares
`a < b` and stops there. Comparisons are only understood by `IF` and
`WHILE`; anywhere else they stop the program with an error.

```text
x := 2 + 3 * 4     { 14 }
y := (2 + 3) * 4   { 20 }
z := -7 / 2        { -3 }
```

*/

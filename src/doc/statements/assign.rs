/*!
# `<variable> := <expression>`

## Purpose
Store a value in a variable.

## Remarks
The variable is created if it does not exist yet. There is only one
set of variables; subroutines and loops see and change the same ones.

## Example
```text
program t:
    a := 5
    a := a * a
    print a
end
25
```

*/

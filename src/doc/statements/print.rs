/*!
# `PRINT <expression>`

## Purpose
Print the value of an expression on its own line.

## Example
```text
program t:
    print 6 * 7
end
42
```

*/

/*!
# `WHILE <condition> : ... ENDWHILE`

## Purpose
Loop until the condition evaluates false.

## Remarks
The condition is evaluated again every time `ENDWHILE` is reached, so it
sees whatever the body changed.

## Example
```text
program t:
    n := 1
    while n < 100:
        n := n * 2
    endwhile
    print n
end
128
```

*/

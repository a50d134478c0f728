/*!
# `FOR <variable> := <expression> TO <expression> : ... ENDFOR`

## Purpose
Run the body a fixed number of times.

## Remarks
The number of passes is the upper bound minus the starting value,
worked out once before the first pass. After every pass the variable
goes up by one. Changing the variable inside the body does not change
how many passes are made. A count of zero or less skips the body.

## Example
```text
program t:
    for i := 0 to 3:
        print i
    endfor
end
0
1
2
```

*/

/*!
# `RETURN`

## Purpose
`RETURN` leaves a subroutine early.

## Remarks
See `CALL`. `RETURN` outside a subroutine is a `RETURN WITHOUT CALL` error.

## Example
```text
program t:
    sub first:
        i := 0
        while 1:
            i := i + 1
            if i = 3:
                return
            endif
        endwhile
    endsub
    call first
    print i
end
3
```

*/

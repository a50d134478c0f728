/*!
# `CALL [<name>]`

## Purpose
Run the most recently defined subroutine, then continue after the `CALL`.

## Remarks
The name is optional and is not looked up. Reaching `ENDSUB` returns
just like `RETURN`. Calls may nest and recurse up to 256 deep.

## Example
```text
program t:
    sub hello:
        print 1
    endsub
    call hello
    call hello
end
1
1
```

*/

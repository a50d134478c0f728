/*!
# `IF <condition> : ... [ELSE : ...] ENDIF`

## Purpose
Do something contingent on a predicate.

## Remarks
Any non-zero value is true. See the limits appendix about nesting in
the false branch.

## Example
```text
program t:
    a := 10
    if a < 30:
        print a
    else:
        print 0
    endif
end
10
```

*/

/*!
# `INPUT <variable>`

## Purpose
Read an integer from the terminal into a variable.

## Example
```text
program t:
    input a
    print a + 1
end
Enter a value for a: 41
42
```

*/

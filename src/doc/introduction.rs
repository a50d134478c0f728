/*!
# Introductory Tutorial for tiny

tiny runs one program file from start to finish. Write your program
in any text editor, save it, and hand the file name to the `tiny`
executable.

```text
$ tiny hello.tiny
```

Every program begins with a header naming the program and ends with
`END`. Statements go one per line in between.

```text
program hello:
    print 42
end
```

Running it prints the value and exits.

```text
$ tiny hello.tiny
42
```

Values are whole numbers. Variables come into existence the first
time you assign to them with `:=`.

```text
program double:
    input n
    print n * 2
end
```

`INPUT` asks for a value at the terminal.

```text
$ tiny double.tiny
Enter a value for n: 21
42
```

Anything between `{` and `}` is a comment. Comments may run over
several lines.

```text
program comments:
    { sum the first ten numbers }
    total := 0
    for i := 1 to 11:
        total := total + i
    endfor
    print total
end
```

When something goes wrong the run stops and tiny reports what it
found, the source line, and the token position where it stopped.

```text
$ tiny broken.tiny
UNKNOWN SYMBOL IN LINE 2 AT 5; totl
```

Pass `--trace` to see each source line number as it starts executing.
This is the same idea as `TRON` in the BASICs of old.

```text
$ tiny --trace hello.tiny
[2]42
```

*/

pub(super) const ROOT_LONG_ABOUT: &str = "\
Stamp author headers onto trees of source files

Authorstamp walks a directory tree and prepends an author attribution comment
block to every source file that does not already contain it. Files that carry
the header anywhere in their content are left untouched, so running the tool
again is always safe.

The default header is:

  /*
  Author: Ben Mezger (github.com/benmezger)
  */

and the default eligible files are regular files ending in '.rs'.

COMMANDS:

  stamp [PATH]
    Prepend the header (followed by one blank line) to every eligible file
    under PATH that lacks it. PATH defaults to 'src'. Prints 'Skipping <file>'
    for every file that already has the header. Stops at the first error;
    files stamped before the error stay stamped.

  check [PATH]
    Read-only. Prints 'Missing header: <file>' for each eligible file without
    the header and exits with status 1 if there are any.

GLOBAL OPTIONS:

  -C <DIRECTORY>
    Change to directory before operating (like git -C or make -C).

  --config <FILE>
    TOML file overriding the header and the file suffix:

      header = \"/*\\nAuthor: Someone (example.com)\\n*/\\n\"
      extension = \".rs\"

EXIT CODES:

  0    Success
  1    'check' found files missing the header
  255  Any error (I/O, invalid UTF-8, bad configuration)
";

pub(super) const STAMP_LONG_ABOUT: &str = "\
Prepend the author header to every eligible file that lacks it.

Each stamped file becomes: the header, one blank line, then the original
content byte for byte. Files are truncated and rewritten in place, so hard
links, ownership and permissions are kept; a read-only file stops the run
with an error. Files already containing the header are reported as
'Skipping <file>' on stdout and left untouched.

Use --dry-run to see what would change (run with -v to list 'Would stamp'
lines).";

pub(super) const CHECK_LONG_ABOUT: &str = "\
List eligible files missing the author header.

Nothing is written. Exits with status 0 when every eligible file carries the
header and 1 otherwise, which makes it suitable for CI.";

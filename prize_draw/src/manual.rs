/*!

This is the long-form manual for `prize_draw` and the `raffle` program.

## Participant lists

The list is a table with a header row. The first column holds the name of the
participant, the second column the handle (social account, email, ticket
number, ...). Any other column is ignored.

```text
Name         | Instagram
-------------+------------
Alice Martin | @alice.m
Bob          | @bobby
             | @ghost        <- skipped, no name
Cara Rossi   | @cara
```

Rows where the name or the handle is blank (after removing surrounding
whitespace) are skipped without error. A list without any usable row is
rejected, and the list loaded before it stays in place.

The following formats are supported:
* `xlsx` Excel workbooks (also `xlsm`, `xlsb`, `xls` and OpenDocument `ods`).
  The first worksheet is used unless `--excel-worksheet-name` says otherwise.
* `csv` Comma Separated Values.

The format is guessed from the extension of the file. Use `--input-type` to
force it.

## Draws

Three prizes are drawn, in this order: third place, second place, first place.
Each draw picks one participant uniformly at random among the ones that have
not won yet. After the first place is drawn, no further draw is possible.

Every row of the list is a separate ticket: two rows with the same name and
handle can both win. Loading a new list starts the draw over from the third
place.

Before each winner is shown, the program cycles through random names from the
remaining participants. The winner is picked before this animation starts; the
names shown during the animation do not influence it. The number of names and
their pace are set with `animationTicks` and `animationIntervalMs`.

## Configuration

All the options may be stored in a JSON file passed with `--config`:

```json
{
  "title": "Winter giveaway",
  "participantsFile": "participants.xlsx",
  "excelWorksheetName": "Entries",
  "imagesDirectory": "prizes",
  "animationTicks": 20,
  "animationIntervalMs": 100,
  "randomSeed": 2024,
  "outputFile": "winners.json"
}
```

Relative paths are resolved from the directory of the configuration file.
Options given on the command line take precedence.

### Prize images

Each prize may have an image, either listed one by one under `prizeImages`
(`third`, `second`, `first`) or found in `imagesDirectory` as
`third-place.png`, `second-place.png` and `first-place.png`. An image that
cannot be read, or that is not a PNG, JPEG or GIF file, cancels the draw before
any winner is picked: fix the file and draw again.

### Reproducible draws

With `randomSeed` (or `--seed`), the same list and the same seed always give
the same winners and the same animation.

## Output

With `--out`, a summary of the winners is written in JSON once the program
ends. Use `--out stdout` to print it.

```json
{
  "title": "Winter giveaway",
  "participants": 3,
  "winners": [
    { "place": "third", "name": "Bob", "handle": "@bobby", "row": 3 },
    { "place": "second", "name": "Alice Martin", "handle": "@alice.m", "row": 2 },
    { "place": "first", "name": "Cara Rossi", "handle": "@cara", "row": 5 }
  ]
}
```

*/

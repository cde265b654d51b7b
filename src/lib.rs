//! # linebasic
//!
//! A tiny line-numbered BASIC: numbered statement slots, `GOTO`,
//! `IF...THEN...ELSE`, integer and string globals, and
//! `LET`/`PRINT`/`INPUT`/`EXIT`.
//!
//! Start the executable and type at the `> ` prompt. A line starting
//! with a number is stored at that line; anything else runs at once.
//! ```text
//! > 10 LET X = 0
//! > 20 LET X + 1
//! > 30 IF X < 3 THEN GOTO 20 ELSE PRINT "done " X
//! > RUN
//! done 3
//! ```
//!
//! `LIST` shows the program as typed, `LISTDEBUG` shows the tokens,
//! `VARS` shows every variable, `NEW` starts over and `EXIT` quits.
//! Pass a file name to enter each of its lines as if typed.

pub mod lang;
pub mod mach;
pub mod term;

// Interface adapters: line protocol, console I/O, clocks and sprite timing.

pub mod clock;
pub mod console;
pub mod presentation;
pub mod protocol;

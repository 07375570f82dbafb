//! Reset entry.
//!
//! The boot loader jumps here in ARM state, supervisor mode, with IRQ
//! and FIQ masked and the MMU off. Nothing here turns any of that on.

core::arch::global_asm!(
    r#"
    .section .text.start, "ax"
    .arm
    .global _start
    .type _start, %function
_start:
    // only CPU0 runs the program, park the rest
    mrc     p15, 0, r0, c0, c0, 5
    ands    r0, r0, #3
    bne     2f

    ldr     sp, =_stack_top

    // zero .bss, .data was loaded in place
    ldr     r0, =__sbss
    ldr     r1, =__ebss
    mov     r2, #0
1:
    cmp     r0, r1
    strlo   r2, [r0], #4
    blo     1b

    bl      main

2:
    wfe
    b       2b

    .ltorg
"#
);

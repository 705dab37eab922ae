use std::fs::read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use gb_core::ppu::{HEIGHT, WIDTH};
use gb_core::{Emulator, InputKey};
use gumdrop::Options;
use log::{error, info, LevelFilter};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use simplelog::{Config, TermLogger, TerminalMode};

const FPS: u64 = 60;
const FRAME_DELAY: Duration = Duration::from_nanos(1_000_000_000u64 / FPS);
const SCREEN_WIDTH: u32 = WIDTH as u32;
const SCREEN_HEIGHT: u32 = HEIGHT as u32;
const SCALE: u32 = 4;

#[derive(Debug, Options)]
struct AppOptions {
    #[options(free, help = "path to a .gb ROM file")]
    rom_path: Option<PathBuf>,
    #[options(help = "print this help message")]
    help: bool,
    #[options(short = "v", help = "enable verbose (trace-level) logging")]
    verbose: bool,
}

fn main() -> ExitCode {
    let options = AppOptions::parse_args_default_or_exit();

    let level = if options.verbose { LevelFilter::Trace } else { LevelFilter::Info };
    TermLogger::init(level, Config::default(), TerminalMode::Mixed).unwrap();

    let rom_path = match options.rom_path {
        Some(path) => path,
        None => {
            eprintln!("{}", AppOptions::usage());
            return ExitCode::FAILURE;
        }
    };

    let rom = match read(&rom_path) {
        Ok(rom) => rom,
        Err(e) => {
            error!("failed to read rom {}: {}", rom_path.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let mut emulator = match Emulator::new(rom) {
        Ok(emulator) => emulator,
        Err(e) => {
            error!("failed to load rom: {}", e);
            return ExitCode::FAILURE;
        }
    };

    run(&mut emulator)
}

fn run(emulator: &mut Emulator) -> ExitCode {
    let sdl_context = sdl2::init().expect("failed to initialise SDL context");
    let video_subsystem = sdl_context.video().expect("SDL context failed to initialise video");

    let window = video_subsystem
        .window("gb-cli", SCREEN_WIDTH * SCALE, SCREEN_HEIGHT * SCALE)
        .position_centered()
        .build()
        .expect("failed to create window");

    let mut canvas = window.into_canvas().build().expect("failed to create canvas");
    let texture_creator = canvas.texture_creator();
    let mut texture = texture_creator
        .create_texture_streaming(PixelFormatEnum::ARGB8888, SCREEN_WIDTH, SCREEN_HEIGHT)
        .expect("failed to create framebuffer texture");

    let mut event_pump = sdl_context.event_pump().expect("failed to create event pump");

    'mainloop: loop {
        let frame_start = Instant::now();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => break 'mainloop,
                Event::KeyDown { keycode: Some(Keycode::Escape), .. } => break 'mainloop,
                Event::KeyDown { keycode: Some(key), repeat: false, .. } => {
                    if let Some(input) = keycode_to_input(key) {
                        emulator.press_key(input);
                    }
                }
                Event::KeyUp { keycode: Some(key), .. } => {
                    if let Some(input) = keycode_to_input(key) {
                        emulator.release_key(input);
                    }
                }
                _ => {}
            }
        }

        emulator.run_frame();

        if let Some(halt) = emulator.diagnostic_halt() {
            error!("cpu halted on unknown opcode {:#04X} at pc {:#06X}", halt.opcode, halt.pc);
            break 'mainloop;
        }

        let framebuffer = emulator.ppu().framebuffer();
        texture
            .update(None, as_bgra_bytes(framebuffer), (SCREEN_WIDTH * 4) as usize)
            .expect("failed to upload framebuffer");
        canvas.clear();
        canvas.copy(&texture, None, None).expect("failed to blit framebuffer");
        canvas.present();

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_DELAY {
            std::thread::sleep(FRAME_DELAY - elapsed);
        }
    }

    for &byte in emulator.serial_debug_buffer() {
        print!("{}", byte as char);
    }

    info!("shutting down");
    if emulator.diagnostic_halt().is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// The framebuffer is `u32` ARGB8888 already; SDL wants the matching raw
/// bytes to hand to the streaming texture, native-endian.
fn as_bgra_bytes(framebuffer: &[u32]) -> &[u8] {
    unsafe { std::slice::from_raw_parts(framebuffer.as_ptr() as *const u8, framebuffer.len() * 4) }
}

fn keycode_to_input(key: Keycode) -> Option<InputKey> {
    match key {
        Keycode::Up => Some(InputKey::Up),
        Keycode::Down => Some(InputKey::Down),
        Keycode::Left => Some(InputKey::Left),
        Keycode::Right => Some(InputKey::Right),
        Keycode::X => Some(InputKey::A),
        Keycode::Z => Some(InputKey::B),
        Keycode::Return => Some(InputKey::Start),
        Keycode::RShift => Some(InputKey::Select),
        _ => None,
    }
}

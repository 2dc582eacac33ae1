use std::sync::Arc;

use serde::Serialize;

use crate::allocator::IdAllocator;
use crate::args::{Args, Command};
use crate::command::format_command;
use crate::docker::DockerEngine;
use crate::image::format_image;
use crate::links::parse_links;
use crate::memory::{convert_memory, MemoryLimit};
use crate::naming::{NameGenerator, Namespace};
use crate::port::{format_running_ports, parse_port, PortSpec};
use crate::restart::{parse_restart, serialize_restart};

pub async fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Command::Name { label, name, count } => {
            let namespace = match &args.project_dir {
                Some(dir) => Namespace::from_path(dir),
                None => Namespace::from_current_dir()?,
            };
            let engine = DockerEngine::new(&args.docker)?;
            let allocator = Arc::new(IdAllocator::new(engine));

            let seed = allocator.initialize().await?;
            log::info!("Namespace: {:?}, highest id in use: {}", namespace.as_str(), seed);

            let generator = NameGenerator::new(namespace, allocator);
            for _ in 0..count {
                println!("{}", generator.generate_name(name.as_deref(), &label).await?);
            }
        }
        Command::Image { image } => print_json(&format_image(Some(image.as_str())))?,
        Command::Command { command } => print_json(&format_command(Some(command.as_str())))?,
        Command::Port { specs } => {
            for spec in specs {
                match parse_port(&spec) {
                    PortSpec::Valid(port) => print_json(&port)?,
                    PortSpec::Unrecognized(spec) => {
                        log::warn!("Unrecognized port specification: {}", spec)
                    }
                }
            }
        }
        Command::Ports { container } => {
            let engine = DockerEngine::new(&args.docker)?;
            let ports = engine.running_ports(&container).await?;
            for line in format_running_ports(ports.as_ref()) {
                println!("{}", line);
            }
        }
        Command::Links { links } => print_json(&parse_links(Some(links.as_slice())))?,
        Command::Restart { spec } => {
            let policy = parse_restart(Some(spec.as_str()))?;
            log::info!("Shorthand: {:?}", serialize_restart(policy.as_ref()));
            print_json(&policy)?
        }
        Command::Memory { value } => {
            let value = match value.parse::<u64>() {
                Ok(bytes) => MemoryLimit::Bytes(bytes),
                Err(_) => MemoryLimit::Spec(value),
            };
            print_json(&convert_memory(Some(value)))?
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

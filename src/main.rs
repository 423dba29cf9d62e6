use kas_form_core::app::native::Session;
use kas_form_core::error::{ErrorKind, Result};
use kas_form_core::form::FormEvent;
use kas_form_core::model::structs::{AmountMode, Branch, StatusKind};

fn print_usage(prog: &str) {
    println!("pemakaian: {prog} <kelas> <nama> <tanggal> <metode: sameDay|arrears|advance> <jumlah|minggu>");
    println!("           {prog} baru <kelas> <nama>");
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage(&args[0]);
        return Ok(());
    }

    let mut session = Session::connect().await?;

    if args[1] == "baru" {
        if args.len() < 4 {
            print_usage(&args[0]);
            return Ok(());
        }
        session
            .dispatch(FormEvent::BranchSelected(Branch::NewStudent))
            .await;
        session
            .dispatch(FormEvent::ClassChanged(args[2].clone()))
            .await;
        session
            .dispatch(FormEvent::NameChanged(args[3].clone()))
            .await;
    } else {
        if args.len() < 6 {
            print_usage(&args[0]);
            return Ok(());
        }

        session.dispatch(FormEvent::Started).await;
        if session.state().roster.is_empty() {
            if let Some(status) = session.state().status.as_ref() {
                println!("{}", status.text);
            }
            return Ok(());
        }
        println!("kelas terdaftar: {:?}", session.state().class_options());

        let branch = match args[4].as_str() {
            "sameDay" => Branch::SameDay,
            "arrears" => Branch::Arrears,
            "advance" => Branch::Advance,
            other => {
                return Err(ErrorKind::ParseError(format!("metode tidak dikenal: {other}")).into())
            }
        };
        session.dispatch(FormEvent::BranchSelected(branch)).await;
        session
            .dispatch(FormEvent::ClassChanged(args[1].clone()))
            .await;
        session
            .dispatch(FormEvent::NameSelected(args[2].clone()))
            .await;
        session
            .dispatch(FormEvent::DateChanged(args[3].clone()))
            .await;
        match branch {
            Branch::SameDay => {
                session
                    .dispatch(FormEvent::AmountModeChanged(AmountMode::Custom))
                    .await;
                session
                    .dispatch(FormEvent::AmountChanged(args[5].clone()))
                    .await;
            }
            _ => {
                session
                    .dispatch(FormEvent::CountChanged(args[5].clone()))
                    .await;
            }
        }
    }

    session.dispatch(FormEvent::SubmitPressed).await;

    match session.state().status.as_ref() {
        Some(status) if status.kind == StatusKind::Success => println!("sukses: {}", status.text),
        Some(status) => println!("{}", status.text),
        None => println!("selesai tanpa pesan dari server"),
    }

    Ok(())
}

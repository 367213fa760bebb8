use named_events::{args, channel, Callback, Flow};

named_events::declare! {
    event Ready;
    event Sum = "math.sum";
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let ready = Ready::subscribe(Callback::new(|args| {
        println!("Ready with: {:?}", args);
        Ok(())
    }));
    Ready::trigger(args![])?;

    let sum = Callback::new(|args| {
        let a = args.get::<i32>(0).copied().ok_or("first operand missing")?;
        let b = args.get::<i32>(1).copied().ok_or("second operand missing")?;
        println!("{} + {} = {}", a, b, a + b);
        Ok(())
    });
    let _ = Sum::subscribe(sum.clone());
    Sum::trigger(args![5, 10])?;

    let late = channel::get("math.sum").subscribe(Callback::new(|_| Ok(())));
    println!("Last sum arguments: {:?}", late.last_args());
    late.unsubscribe();
    ready.unsubscribe();

    named_events::subscribe("close", Callback::new(|_| {
        println!("Closing, stop here");
        Ok(Flow::Stop)
    }));
    named_events::subscribe("close", Callback::new(|_| {
        println!("Never printed");
        Ok(())
    }));
    named_events::trigger("close", args![])?;

    Ok(())
}

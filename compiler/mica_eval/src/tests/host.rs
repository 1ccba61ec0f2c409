use pretty_assertions::assert_eq;

use super::*;
use crate::{silent_handler, EvalResult, Interpreter, RuntimeError, RuntimeErrorKind, Value};

fn twice(_: &mut Interpreter<'_>, args: Vec<Value>) -> EvalResult {
    match args.as_slice() {
        [value] => crate::evaluate_binary(mica_ir::BinaryOp::Add, value, value),
        _ => Err(RuntimeError::undefined_function("twice", args.len())),
    }
}

fn shout(interp: &mut Interpreter<'_>, args: Vec<Value>) -> EvalResult {
    for arg in &args {
        interp.print_handler().println(&format!("{arg}!"));
    }
    Ok(Value::Nil)
}

fn make_record(interp: &mut Interpreter<'_>, _: Vec<Value>) -> EvalResult {
    interp.new_record()
}

#[test]
fn host_record_members_are_visible() {
    let interner = StringInterner::new();
    let output = buffer_handler();
    let mut interp = InterpreterBuilder::new(&interner)
        .print_handler(output.clone())
        .build();

    let point = interp.new_record().unwrap();
    interp
        .define_member(&point, interner.intern("x"), Value::from(1))
        .unwrap();
    interp
        .define_member_native(&point, interner.intern("twice"), 1, twice)
        .unwrap();
    interp.define_global(interner.intern("p"), point.clone());

    let source = parse_program(
        "DEF main() DO print(p.x); p.x = 3; RETURN p.x + p.twice(4); END",
        &interner,
    );
    assert_eq!(interp.run(&source).unwrap(), Value::from(11));
    assert_eq!(output.output(), "1\n");
    assert_eq!(
        interp.member(&point, interner.intern("x")),
        Some(&Value::from(3))
    );
}

#[test]
fn host_natives_and_globals() {
    let interner = StringInterner::new();
    let output = buffer_handler();
    let mut interp = InterpreterBuilder::new(&interner)
        .print_handler(output.clone())
        .build();
    interp.define_native(interner.intern("shout"), 1, shout);
    interp.define_global(interner.intern("greeting"), Value::from("hey"));

    let source = parse_program("DEF main() DO shout(greeting); RETURN 0; END", &interner);
    interp.run(&source).unwrap();
    assert_eq!(output.output(), "hey!\n");
    assert_eq!(
        interp.global(interner.intern("greeting")),
        Some(&Value::from("hey"))
    );
}

#[test]
fn program_definitions_shadow_globals() {
    let interner = StringInterner::new();
    let mut interp = InterpreterBuilder::new(&interner)
        .print_handler(silent_handler())
        .build();
    interp.define_global(interner.intern("x"), Value::from(10));
    let source = parse_program("LET x = 1; DEF main() DO RETURN x; END", &interner);
    assert_eq!(interp.run(&source).unwrap(), Value::from(1));
    assert_eq!(interp.global(interner.intern("x")), Some(&Value::from(10)));
}

#[test]
fn member_access_requires_a_record() {
    let interner = StringInterner::new();
    let mut interp = InterpreterBuilder::new(&interner).build();
    let not_record = Value::from(1);
    let err = interp
        .define_member(&not_record, interner.intern("x"), Value::Nil)
        .unwrap_err();
    assert_eq!(err.kind, RuntimeErrorKind::NotARecord);
    assert_eq!(interp.member(&not_record, interner.intern("x")), None);
}

#[test]
fn member_assignment_on_non_record_fails() {
    let (result, _) = run("LET n = 1; DEF main() DO n.x = 2; RETURN 0; END");
    assert_eq!(result.unwrap_err().kind, RuntimeErrorKind::NotARecord);
}

#[test]
fn records_have_no_parent_scope() {
    let interner = StringInterner::new();
    let mut interp = InterpreterBuilder::new(&interner)
        .print_handler(silent_handler())
        .build();
    let record = interp.new_record().unwrap();
    interp.define_global(interner.intern("r"), record);
    // `print` lives in the prelude, which a record does not see.
    let source = parse_program("DEF main() DO r.print(1); RETURN 0; END", &interner);
    assert_eq!(
        interp.run(&source).unwrap_err().kind,
        RuntimeErrorKind::UndefinedFunction
    );
}

#[test]
fn records_made_during_a_call_outlive_its_frame() {
    let interner = StringInterner::new();
    let mut interp = InterpreterBuilder::new(&interner)
        .print_handler(silent_handler())
        .build();
    interp.define_native(interner.intern("make"), 0, make_record);
    let source = parse_program(
        "DEF build() DO LET r = make(); r.x = 4; RETURN r; END \
         DEF touch(n) DO RETURN n; END \
         DEF main() DO LET a = build(); touch(1); a.y = a.x + 1; RETURN a.y; END",
        &interner,
    );
    assert_eq!(interp.run(&source).unwrap(), Value::from(5));
}

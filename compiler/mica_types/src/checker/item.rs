//! Fields, methods, and the `main` entry point.

use mica_diagnostic::ErrorCode;
use mica_ir::{ExprArena, ExprId, Field, Function, Method, Name, Source, Span, Type, Variable};

use super::{Analyzer, CheckResult, ReturnType};
use crate::{require_assignable, SemanticError};

/// A method's signature as declared before its body is checked.
struct Signature {
    function: Function,
    /// No return annotation: the body decides the return type.
    inferred: bool,
}

/// A body that called a method whose return type is not yet known.
struct Stall {
    error: SemanticError,
    /// The type the body's first `RETURN` produced before it stalled.
    provisional: Option<Type>,
}

impl Analyzer<'_> {
    /// Fields in order, then every method signature, then method bodies.
    ///
    /// Signatures are declared before any body is analyzed, so methods may
    /// call each other regardless of order. Field initializers see only the
    /// fields above them.
    ///
    /// A body that calls a method with an unannotated return type waits
    /// until that method's own body has been checked. Bodies are retried in
    /// rounds until every one completes. When a round makes no progress
    /// (recursion), each waiting method adopts the type of its first
    /// `RETURN`, and the next round checks every `RETURN` against it.
    pub(super) fn check_source(&mut self, source: &mut Source) -> CheckResult {
        let Source {
            fields,
            methods,
            arena,
        } = source;

        for field in fields.iter_mut() {
            self.check_field(field, arena)?;
        }

        let mut signatures = methods
            .iter()
            .map(|method| self.declare_method(method))
            .collect::<CheckResult<Vec<_>>>()?;
        self.pending = signatures
            .iter()
            .filter(|s| s.inferred)
            .map(|s| (s.function.name, s.function.arity()))
            .collect();

        let mut remaining: Vec<usize> = (0..methods.len()).collect();
        while !remaining.is_empty() {
            let attempted = remaining.len();
            let mut stalled = Vec::new();
            for index in remaining {
                let stall = self.check_method(&mut methods[index], &signatures[index], arena)?;
                if let Some(stall) = stall {
                    stalled.push((index, stall));
                }
            }
            if stalled.len() == attempted {
                self.adopt_provisional(&mut signatures, &mut stalled)?;
            }
            remaining = stalled.into_iter().map(|(index, _)| index).collect();
        }

        self.check_main(methods)?;
        tracing::debug!(
            fields = fields.len(),
            methods = methods.len(),
            "analysis complete"
        );
        Ok(())
    }

    /// Fix the return type of every stalled method that has seen a
    /// `RETURN`, as if it had been annotated. Fails with the first stall
    /// when none has.
    fn adopt_provisional(
        &mut self,
        signatures: &mut [Signature],
        stalled: &mut [(usize, Stall)],
    ) -> CheckResult {
        let mut adopted = false;
        for (index, stall) in stalled.iter_mut() {
            let signature = &mut signatures[*index];
            let Some(ty) = stall.provisional.take() else {
                continue;
            };
            if !signature.inferred {
                continue;
            }
            signature.function.ret = ty;
            signature.inferred = false;
            let function = &signature.function;
            self.pending.remove(&(function.name, function.arity()));
            self.scopes.define_function(
                self.scope,
                function.name,
                function.arity(),
                function.clone(),
            );
            adopted = true;
        }
        match stalled.first() {
            Some((_, stall)) if !adopted => Err(stall.error.clone()),
            _ => Ok(()),
        }
    }

    fn check_field(&mut self, field: &mut Field, arena: &mut ExprArena) -> CheckResult {
        let ty = self.binding_type(field.name, field.type_name, field.value, field.span, arena)?;
        let variable = Variable {
            name: field.name,
            ty,
        };
        self.scopes
            .define_variable(self.scope, field.name, variable.clone());
        field.resolved = Some(variable);
        Ok(())
    }

    /// Type of a new binding from its annotation and/or initializer.
    ///
    /// With both, the initializer must be assignable to the annotation.
    /// With neither, the binding is rejected.
    pub(super) fn binding_type(
        &mut self,
        name: Name,
        type_name: Option<Name>,
        value: Option<ExprId>,
        span: Span,
        arena: &mut ExprArena,
    ) -> CheckResult<Type> {
        let declared = type_name
            .map(|t| self.resolve_type_name(t, span))
            .transpose()?;
        let Some(value) = value else {
            return declared.ok_or_else(|| SemanticError::untyped_declaration(self.text(name), span));
        };

        let value_ty = self.check_expr(value, arena)?;
        match declared {
            Some(declared) => {
                let value_span = arena.get_expr(value).span;
                require_assignable(&declared, &value_ty, value_span, self.interner)?;
                Ok(declared)
            }
            None => Ok(value_ty),
        }
    }

    /// Bind a method's signature in the program scope.
    ///
    /// An unannotated return type stays pending until the body has been
    /// analyzed.
    fn declare_method(&mut self, method: &Method) -> CheckResult<Signature> {
        let params = method
            .params
            .iter()
            .map(|p| match p.type_name {
                Some(t) => self.resolve_type_name(t, p.span),
                None => Ok(Type::Any),
            })
            .collect::<CheckResult<Vec<_>>>()?;
        let (ret, inferred) = match method.return_type {
            Some(t) => (self.resolve_type_name(t, method.span)?, false),
            None => (Type::Any, true),
        };

        let function = Function {
            name: method.name,
            params,
            ret,
        };
        self.scopes.define_function(
            self.scope,
            method.name,
            function.arity(),
            function.clone(),
        );
        Ok(Signature { function, inferred })
    }

    /// Check a method body. Returns the stall when it called a method whose
    /// return type is still pending.
    fn check_method(
        &mut self,
        method: &mut Method,
        signature: &Signature,
        arena: &mut ExprArena,
    ) -> CheckResult<Option<Stall>> {
        let mut function = signature.function.clone();
        self.returns = if signature.inferred {
            ReturnType::Inferred(None)
        } else {
            ReturnType::Declared(function.ret.clone())
        };

        let body = self.in_child_scope(method.span, |this| {
            for (param, ty) in method.params.iter().zip(&function.params) {
                this.scopes.define_variable(
                    this.scope,
                    param.name,
                    Variable {
                        name: param.name,
                        ty: ty.clone(),
                    },
                );
            }
            this.check_stmts(method.body, arena)
        });
        let returns = std::mem::replace(&mut self.returns, ReturnType::Declared(Type::Any));

        match body {
            Ok(()) => {}
            Err(error) if error.code == ErrorCode::E2012 => {
                let provisional = match returns {
                    ReturnType::Inferred(ty) => ty,
                    ReturnType::Declared(_) => None,
                };
                return Ok(Some(Stall { error, provisional }));
            }
            Err(error) => return Err(error),
        }

        if let ReturnType::Inferred(ty) = returns {
            function.ret = ty.unwrap_or(Type::Nil);
            self.pending.remove(&(method.name, function.arity()));
            self.scopes.define_function(
                self.scope,
                method.name,
                function.arity(),
                function.clone(),
            );
        }

        tracing::debug!(
            method = self.text(method.name),
            arity = function.arity(),
            ret = function.ret.name(self.interner),
            "method signature"
        );
        method.resolved = Some(function);
        Ok(None)
    }

    /// The last `main` with no parameters must return `Integer`.
    fn check_main(&self, methods: &[Method]) -> CheckResult {
        let main = self.interner.intern("main");
        let Some(method) = methods
            .iter()
            .rev()
            .find(|m| m.name == main && m.params.is_empty())
        else {
            return Err(SemanticError::missing_main(Span::DUMMY));
        };
        match &method.resolved {
            Some(function) if function.ret == Type::Integer => Ok(()),
            _ => Err(SemanticError::missing_main(method.span)),
        }
    }
}

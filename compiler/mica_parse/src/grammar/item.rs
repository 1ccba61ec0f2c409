//! Top-level items.

use mica_ir::{Field, Method, Name, Param, Source, TokenKind};

use crate::{ParseResult, Parser};

impl Parser<'_> {
    /// `source := field* method*`
    pub(crate) fn parse_source(mut self) -> ParseResult<Source> {
        let mut fields = Vec::new();
        while self.cursor.check("LET") {
            fields.push(self.parse_field()?);
        }

        let mut methods = Vec::new();
        while self.cursor.check("DEF") {
            methods.push(self.parse_method()?);
        }

        if !self.cursor.is_at_end() {
            return Err(self.cursor.error("`LET` or `DEF`"));
        }

        Ok(Source {
            fields,
            methods,
            arena: self.arena,
        })
    }

    /// `field := 'LET' IDENT (':' IDENT)? ('=' expression)? ';'`
    fn parse_field(&mut self) -> ParseResult<Field> {
        let start = self.cursor.current_span();
        self.cursor.expect("LET", "`LET`")?;
        let name = self.parse_ident("field name")?;
        let type_name = self.parse_type_annotation()?;
        let value = if self.cursor.eat("=") {
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.cursor.expect(";", "`;`")?;

        Ok(Field {
            name,
            type_name,
            value,
            span: self.span_from(start),
            resolved: None,
        })
    }

    /// `method := 'DEF' IDENT '(' params? ')' (':' IDENT)? 'DO' statement* 'END'`
    fn parse_method(&mut self) -> ParseResult<Method> {
        let start = self.cursor.current_span();
        self.cursor.expect("DEF", "`DEF`")?;
        let name = self.parse_ident("method name")?;

        self.cursor.expect("(", "`(`")?;
        let mut params = Vec::new();
        if !self.cursor.check(")") {
            loop {
                params.push(self.parse_param()?);
                if !self.cursor.eat(",") {
                    break;
                }
            }
        }
        self.cursor.expect(")", "`,` or `)`")?;

        let return_type = self.parse_type_annotation()?;
        self.cursor.expect("DO", "`DO`")?;
        let body = self.parse_block(&["END"])?;
        self.cursor.expect("END", "`END`")?;

        Ok(Method {
            name,
            params,
            return_type,
            body,
            span: self.span_from(start),
            resolved: None,
        })
    }

    fn parse_param(&mut self) -> ParseResult<Param> {
        let start = self.cursor.current_span();
        let name = self.parse_ident("parameter name")?;
        let type_name = self.parse_type_annotation()?;
        Ok(Param {
            name,
            type_name,
            span: self.span_from(start),
        })
    }

    /// `(':' IDENT)?`
    pub(crate) fn parse_type_annotation(&mut self) -> ParseResult<Option<Name>> {
        if self.cursor.eat(":") {
            self.parse_ident("type name").map(Some)
        } else {
            Ok(None)
        }
    }

    pub(crate) fn parse_ident(&mut self, what: &str) -> ParseResult<Name> {
        let token = self.cursor.expect(TokenKind::Identifier, what)?;
        Ok(self.interner.intern(&token.text))
    }
}

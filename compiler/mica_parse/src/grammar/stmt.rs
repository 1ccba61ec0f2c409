//! Statements and block bodies.

use mica_ir::{Stmt, StmtId, StmtKind, StmtRange};

use crate::{ParseResult, Parser};

impl Parser<'_> {
    /// `statement*`, stopping before any of `terminators`.
    ///
    /// The terminator itself is left for the caller to consume.
    pub(crate) fn parse_block(&mut self, terminators: &[&str]) -> ParseResult<StmtRange> {
        let mut stmts = Vec::new();
        while !terminators.iter().any(|t| self.cursor.check(*t)) {
            if self.cursor.is_at_end() {
                let expected = terminators
                    .iter()
                    .map(|t| format!("`{t}`"))
                    .collect::<Vec<_>>()
                    .join(" or ");
                return Err(self.cursor.error(&expected));
            }
            stmts.push(self.parse_stmt()?);
        }
        Ok(self.arena.alloc_stmt_list(stmts))
    }

    fn parse_stmt(&mut self) -> ParseResult<StmtId> {
        let start = self.cursor.current_span();
        let kind = if self.cursor.check("LET") {
            self.parse_declaration()?
        } else if self.cursor.check("IF") {
            self.parse_if()?
        } else if self.cursor.check("FOR") {
            self.parse_for()?
        } else if self.cursor.check("WHILE") {
            self.parse_while()?
        } else if self.cursor.check("RETURN") {
            self.parse_return()?
        } else {
            self.parse_expr_or_assignment()?
        };
        let span = self.span_from(start);
        Ok(self.arena.alloc_stmt(Stmt::new(kind, span)))
    }

    /// `'LET' IDENT (':' IDENT)? ('=' expression)? ';'`
    fn parse_declaration(&mut self) -> ParseResult<StmtKind> {
        self.cursor.expect("LET", "`LET`")?;
        let name = self.parse_ident("variable name")?;
        let type_name = self.parse_type_annotation()?;
        let value = if self.cursor.eat("=") {
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.cursor.expect(";", "`;`")?;
        Ok(StmtKind::Declaration {
            name,
            type_name,
            value,
            resolved: None,
        })
    }

    /// `'IF' expression 'DO' statement* ('ELSE' statement*)? 'END'`
    fn parse_if(&mut self) -> ParseResult<StmtKind> {
        self.cursor.expect("IF", "`IF`")?;
        let condition = self.parse_expr()?;
        self.cursor.expect("DO", "`DO`")?;
        let then_body = self.parse_block(&["ELSE", "END"])?;
        let else_body = if self.cursor.eat("ELSE") {
            self.parse_block(&["END"])?
        } else {
            StmtRange::EMPTY
        };
        self.cursor.expect("END", "`END`")?;
        Ok(StmtKind::If {
            condition,
            then_body,
            else_body,
        })
    }

    /// `'FOR' IDENT 'IN' expression 'DO' statement* 'END'`
    fn parse_for(&mut self) -> ParseResult<StmtKind> {
        self.cursor.expect("FOR", "`FOR`")?;
        let name = self.parse_ident("loop variable")?;
        self.cursor.expect("IN", "`IN`")?;
        let iterable = self.parse_expr()?;
        self.cursor.expect("DO", "`DO`")?;
        let body = self.parse_block(&["END"])?;
        self.cursor.expect("END", "`END`")?;
        Ok(StmtKind::For {
            name,
            iterable,
            body,
        })
    }

    /// `'WHILE' expression 'DO' statement* 'END'`
    fn parse_while(&mut self) -> ParseResult<StmtKind> {
        self.cursor.expect("WHILE", "`WHILE`")?;
        let condition = self.parse_expr()?;
        self.cursor.expect("DO", "`DO`")?;
        let body = self.parse_block(&["END"])?;
        self.cursor.expect("END", "`END`")?;
        Ok(StmtKind::While { condition, body })
    }

    /// `'RETURN' expression ';'`
    fn parse_return(&mut self) -> ParseResult<StmtKind> {
        self.cursor.expect("RETURN", "`RETURN`")?;
        let value = self.parse_expr()?;
        self.cursor.expect(";", "`;`")?;
        Ok(StmtKind::Return { value })
    }

    /// `expression ('=' expression)? ';'`
    fn parse_expr_or_assignment(&mut self) -> ParseResult<StmtKind> {
        let expr = self.parse_expr()?;
        let kind = if self.cursor.eat("=") {
            let value = self.parse_expr()?;
            StmtKind::Assignment {
                receiver: expr,
                value,
            }
        } else {
            StmtKind::Expression(expr)
        };
        self.cursor.expect(";", "`;`")?;
        Ok(kind)
    }
}

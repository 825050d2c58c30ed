use super::CSharpCodeGenerator;
use crate::ast::{
    Block, Declaration, DeclarationStatement, Expression, ResolvedEntity, Statement,
};

impl CSharpCodeGenerator {
    pub fn generate_statement(&mut self, statement: &Statement) {
        self.generate_statement_inner(statement);
        // Armed index brackets belong to the size list inside the same
        // expression tree; an instantiation with no size list must not
        // leak them into the next statement.
        self.take_brackets();
    }

    fn generate_statement_inner(&mut self, statement: &Statement) {
        match statement {
            Statement::Block(block) => self.generate_block(block),
            Statement::If {
                condition,
                then_block,
                else_block,
                ..
            } => {
                self.writer.write_indented("if (");
                self.generate_condition(condition);
                self.writer.write(")");
                self.generate_block(then_block);
                if let Some(else_block) = else_block {
                    self.writer.write_indented("else");
                    self.generate_block(else_block);
                }
            }
            Statement::While {
                condition, block, ..
            } => {
                self.writer.write_indented("while (");
                self.generate_condition(condition);
                self.writer.write(")");
                self.generate_block(block);
            }
            Statement::For {
                declaration,
                iterator,
                block,
                ..
            } => {
                self.writer.write_indented("foreach (");
                self.generate_declaration(declaration);
                self.writer.write(" in ");
                self.generate_expression(iterator);
                self.writer.write(")");
                self.generate_block(block);
            }
            Statement::Return { value, .. } => match value {
                Some(value) => {
                    self.writer.write_indented("return ");
                    self.generate_expression(value);
                    self.writer.write(";");
                }
                None => self.writer.write_indented("return;"),
            },
            Statement::Continue { .. } => self.writer.write("continue;"),
            Statement::Expression { expression, .. } => {
                if Self::is_suppressed_invocation(expression) {
                    return;
                }
                self.generate_expression(expression);
                self.writer.write_line(";");
            }
            Statement::Declaration(declaration) => {
                self.generate_declaration_statement(declaration);
            }
            Statement::Break { span } => self.not_supported("break statement", *span),
            Statement::Yield { value, span } => {
                self.not_supported("yield statement", *span);
                if let Some(value) = value {
                    self.generate_expression(value);
                }
            }
            Statement::Unless {
                condition,
                block,
                span,
            } => {
                self.not_supported("unless statement", *span);
                self.generate_expression(condition);
                self.generate_block(block);
            }
            Statement::Try {
                protected,
                handlers,
                ensure,
                span,
            } => {
                self.not_supported("try statement", *span);
                self.generate_block(protected);
                for handler in handlers {
                    self.not_supported("exception handler", handler.span);
                    self.generate_block(&handler.block);
                }
                if let Some(ensure) = ensure {
                    self.generate_block(ensure);
                }
            }
            Statement::Raise { exception, span } => {
                self.not_supported("raise statement", *span);
                if let Some(exception) = exception {
                    self.generate_expression(exception);
                }
            }
            Statement::Goto { span, .. } => self.not_supported("goto statement", *span),
            Statement::Label { span, .. } => self.not_supported("label statement", *span),
            Statement::Macro {
                arguments,
                body,
                span,
                ..
            } => {
                self.not_supported("macro statement", *span);
                for argument in arguments {
                    self.generate_expression(argument);
                }
                self.generate_block(body);
            }
            Statement::Unpack {
                declarations,
                expression,
                span,
            } => {
                self.not_supported("unpack statement", *span);
                for declaration in declarations {
                    self.generate_declaration(declaration);
                }
                self.generate_expression(expression);
            }
            Statement::Custom { span } => self.not_supported("custom statement", *span),
            Statement::TypeMember { span, .. } => {
                self.not_supported("type member statement", *span);
            }
        }
    }

    pub fn generate_block(&mut self, block: &Block) {
        self.writer.write_line("");
        self.writer.write_line("{");
        self.indented(|this| {
            for statement in &block.statements {
                this.generate_statement(statement);
            }
        });
        self.writer.write_line("");
        self.writer.write_line("}");
    }

    /// Emit a condition, appending a default-value comparison when the
    /// resolved type is not boolean so source truthiness survives.
    fn generate_condition(&mut self, condition: &Expression) {
        self.generate_expression(condition);
        if let Some(ResolvedEntity::Type(entity)) = condition.entity() {
            if !entity.is_boolean() {
                self.writer
                    .write(&format!(" != {}", entity.default_value()));
            }
        }
    }

    pub fn generate_declaration(&mut self, declaration: &Declaration) {
        match &declaration.ty {
            Some(ty) => self.generate_type_reference(ty),
            None => self.writer.write("var"),
        }
        self.writer.write(" ");
        self.writer.write(&declaration.name);
    }

    pub fn generate_declaration_statement(&mut self, statement: &DeclarationStatement) {
        self.generate_declaration(&statement.declaration);
        if let Some(initializer) = &statement.initializer {
            self.writer.write(" = ");
            self.generate_expression(initializer);
        }
        self.writer.write_line(";");
    }
}

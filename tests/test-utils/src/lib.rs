use anyhow::{anyhow, Context, Result};
use rand::{distributions::Alphanumeric, Rng};
use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, ExitStatus, Stdio},
};

/// 在系统临时目录下创建一个唯一的根目录。
/// 如果 `with_testcase` 为 true，则同时创建 `testcase/` 子目录。
pub fn temp_root(prefix: &str, with_testcase: bool) -> Result<PathBuf> {
    let suffix: String = rand::thread_rng()
        .sample_iter(Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();
    let root = std::env::temp_dir().join(format!("{}-{}", prefix, suffix));
    let dir = if with_testcase {
        root.join("testcase")
    } else {
        root.clone()
    };
    fs::create_dir_all(&dir).with_context(|| format!("无法创建目录 {}", dir.display()))?;
    Ok(root)
}

/// 读取文件全部内容 (UTF-8)。
pub fn read_text<P: AsRef<Path>>(path: P) -> Result<String> {
    fs::read_to_string(&path).with_context(|| format!("读取文件失败: {}", path.as_ref().display()))
}

/// 返回目录下的文件名（排序后）。
pub fn file_names<P: AsRef<Path>>(dir: P) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(&dir)
        .with_context(|| format!("读取目录失败: {}", dir.as_ref().display()))?
    {
        names.push(entry?.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// 删除目录，忽略不存在的情况。
pub fn cleanup_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    match fs::remove_dir_all(&path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(anyhow!(
            "删除目录失败: {} -> {err}",
            path.as_ref().display()
        )),
    }
}

/// 子进程执行结果，包含退出状态以及标准输出/错误（UTF-8）。
#[derive(Debug)]
pub struct CommandOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// 返回去除首尾空白后的标准输出。
    pub fn trimmed_stdout(&self) -> &str {
        self.stdout.trim()
    }
}

/// 运行命令并捕获标准输出/错误，默认使用管道。
pub fn run_command(mut command: Command) -> Result<CommandOutput> {
    command.stdout(Stdio::piped());
    command.stderr(Stdio::piped());
    let output = command
        .output()
        .with_context(|| "执行子进程失败".to_string())?;

    let stdout = String::from_utf8(output.stdout)
        .with_context(|| "子进程 stdout 不是有效的 UTF-8".to_string())?;
    let stderr = String::from_utf8(output.stderr)
        .with_context(|| "子进程 stderr 不是有效的 UTF-8".to_string())?;

    Ok(CommandOutput {
        status: output.status,
        stdout,
        stderr,
    })
}

/// 确保子进程成功退出，否则返回错误并携带 stderr。
pub fn ensure_success(output: &CommandOutput, context: &str) -> Result<()> {
    if output.status.success() {
        Ok(())
    } else {
        Err(anyhow!(
            "{context} -> exit={:?}, stderr={}",
            output.status,
            output.stderr.trim()
        ))
    }
}

/// 运行命令，要求成功退出且 stderr 为空，返回捕获的输出。
pub fn run_quietly(command: Command, context: &str) -> Result<CommandOutput> {
    let output = run_command(command)?;
    ensure_success(&output, context)?;
    if !output.stderr.is_empty() {
        return Err(anyhow!("{context} -> 意外的 stderr: {}", output.stderr.trim()));
    }
    Ok(output)
}

/// 运行命令，要求以非零状态退出，返回捕获的输出。
pub fn run_failing(command: Command, context: &str) -> Result<CommandOutput> {
    let output = run_command(command)?;
    if output.status.success() {
        return Err(anyhow!(
            "{context} -> 预期失败但成功退出, stdout={}",
            output.stdout.trim()
        ));
    }
    Ok(output)
}

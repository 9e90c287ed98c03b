//! Snapshot of a full outline over a multi-role tree.

use std::fs;
use std::path::Path;

use rolescope::outline::{OutlinePrinter, TextSink};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn outline(root: &Path) -> String {
    let mut sink = TextSink::new(Vec::new());
    OutlinePrinter::new(root).run(&mut sink).unwrap();
    String::from_utf8(sink.into_inner()).unwrap()
}

#[test]
fn test_multi_role_outline() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    write(
        root,
        "roles/web/tasks/main.yml",
        r#"
- name: Install nginx
  apt:
    name: nginx
- import_tasks: tls.yml
- name: Check the port
  assert:
    that: nginx_port > 0
- service:
    name: nginx
    state: started
"#,
    );
    write(root, "roles/web/tasks/tls.yml", "- name: Copy certificate\n- import_tasks: renew.yaml\n");
    write(root, "roles/web/vars/main.yml", "nginx_port: 80\nnginx_user: www-data\n");
    write(root, "roles/web/files/certs/site.pem", "");
    write(root, "roles/web/files/robots.txt", "");
    write(root, "roles/web/templates/nginx.conf.j2", "");

    write(root, "roles/db/tasks/main.yml", "[]\n");
    write(
        root,
        "roles/db/vars/defaults.yml",
        "- db_name\n- db_user: app\n- {owner: app, mode: \"0640\"}\n",
    );

    write(root, "roles/common/vars/main.yml", "timezone: UTC\n");

    insta::assert_snapshot!(outline(root), @r#"
    👥 db
      🔧 defaults
        - 💲 db_name
        - 💲 db_user
        - 💲 {"owner":"app","mode":"0640"}
      📝 main
    👥 web
      🔧 main
        - 💲 nginx_port
        - 💲 nginx_user
      📝 main
        - Install nginx
        - 📥 import tls
        - 👮 assert
        - Check the port
      📝 tls
        - Copy certificate
        - 📥 import renew.yaml
      📁 files
        📁 certs
          📄 site.pem
        📄 robots.txt
      📁 templates
        📄 nginx.conf.j2
    👥 common
      🔧 main
        - 💲 timezone
    "#);
}
